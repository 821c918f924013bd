//! Provider replies in the shape the test platform returns, trimmed to the fields we read

pub const AUTHORISE_RESPONSE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/" xmlns:xsd="http://www.w3.org/2001/XMLSchema" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
  <soap:Body>
    <ns1:authoriseResponse xmlns:ns1="http://payment.services.adyen.com">
      <ns1:paymentResult>
        <additionalData xmlns="http://payment.services.adyen.com">
          <entry><key xsi:type="xsd:string">cardSummary</key><value xsi:type="xsd:string">1111</value></entry>
        </additionalData>
        <authCode xmlns="http://payment.services.adyen.com">83152</authCode>
        <dccAmount xmlns="http://payment.services.adyen.com" xsi:nil="true"/>
        <dccSignature xmlns="http://payment.services.adyen.com" xsi:nil="true"/>
        <fraudResult xmlns="http://payment.services.adyen.com" xsi:nil="true"/>
        <issuerUrl xmlns="http://payment.services.adyen.com" xsi:nil="true"/>
        <md xmlns="http://payment.services.adyen.com" xsi:nil="true"/>
        <paRequest xmlns="http://payment.services.adyen.com" xsi:nil="true"/>
        <pspReference xmlns="http://payment.services.adyen.com">8813760397300101</pspReference>
        <refusalReason xmlns="http://payment.services.adyen.com" xsi:nil="true"/>
        <resultCode xmlns="http://payment.services.adyen.com">Authorised</resultCode>
      </ns1:paymentResult>
    </ns1:authoriseResponse>
  </soap:Body>
</soap:Envelope>"#;

pub const REFUSED_RESPONSE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
  <soap:Body>
    <ns1:authoriseResponse xmlns:ns1="http://payment.services.adyen.com">
      <ns1:paymentResult>
        <additionalData xmlns="http://payment.services.adyen.com" xsi:nil="true"/>
        <authCode xmlns="http://payment.services.adyen.com" xsi:nil="true"/>
        <pspReference xmlns="http://payment.services.adyen.com">8513760397300202</pspReference>
        <refusalReason xmlns="http://payment.services.adyen.com">CVC Declined</refusalReason>
        <resultCode xmlns="http://payment.services.adyen.com">Refused</resultCode>
      </ns1:paymentResult>
    </ns1:authoriseResponse>
  </soap:Body>
</soap:Envelope>"#;

pub const FAULT_RESPONSE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/">
  <soap:Body>
    <soap:Fault>
      <faultcode>soap:Server</faultcode>
      <faultstring>validation 101 Invalid card number</faultstring>
    </soap:Fault>
  </soap:Body>
</soap:Envelope>"#;

pub const RECURRING_RESPONSE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
  <soap:Body>
    <ns1:listRecurringDetailsResponse xmlns:ns1="http://recurring.services.adyen.com">
      <ns1:result>
        <ns1:creationDate>2013-12-03T15:07:21.000+01:00</ns1:creationDate>
        <ns1:details>
          <ns1:RecurringDetail>
            <ns1:additionalData/>
            <ns1:bank xsi:nil="true"/>
            <ns1:card>
              <cvc xmlns="http://payment.services.adyen.com" xsi:nil="true"/>
              <expiryMonth xmlns="http://payment.services.adyen.com">8</expiryMonth>
              <expiryYear xmlns="http://payment.services.adyen.com">2018</expiryYear>
              <holderName xmlns="http://payment.services.adyen.com">J. Smith</holderName>
              <number xmlns="http://payment.services.adyen.com">1111</number>
            </ns1:card>
            <ns1:creationDate>2013-12-03T15:07:21.000+01:00</ns1:creationDate>
            <ns1:elv xsi:nil="true"/>
            <ns1:name/>
            <ns1:recurringDetailReference>8313763853330012</ns1:recurringDetailReference>
            <ns1:variant>visa</ns1:variant>
          </ns1:RecurringDetail>
          <ns1:RecurringDetail>
            <ns1:bank>
              <bankAccountNumber xmlns="http://payment.services.adyen.com" xsi:nil="true"/>
              <countryCode xmlns="http://payment.services.adyen.com">NL</countryCode>
              <iban xmlns="http://payment.services.adyen.com">NL13TEST0123456789</iban>
              <ownerName xmlns="http://payment.services.adyen.com">A. Schneider</ownerName>
            </ns1:bank>
            <ns1:card xsi:nil="true"/>
            <ns1:creationDate>2014-01-10T09:12:44.000+01:00</ns1:creationDate>
            <ns1:elv xsi:nil="true"/>
            <ns1:recurringDetailReference>8413763853330021</ns1:recurringDetailReference>
            <ns1:variant>sepadirectdebit</ns1:variant>
          </ns1:RecurringDetail>
        </ns1:details>
        <ns1:lastKnownShopperEmail>test@example.com</ns1:lastKnownShopperEmail>
        <ns1:shopperReference>TheShopperReference</ns1:shopperReference>
      </ns1:result>
    </ns1:listRecurringDetailsResponse>
  </soap:Body>
</soap:Envelope>"#;

pub const RECURRING_EMPTY_RESPONSE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
  <soap:Body>
    <ns1:listRecurringDetailsResponse xmlns:ns1="http://recurring.services.adyen.com">
      <ns1:result>
        <ns1:creationDate xsi:nil="true"/>
        <ns1:details/>
        <ns1:lastKnownShopperEmail xsi:nil="true"/>
        <ns1:shopperReference>TheShopperReference</ns1:shopperReference>
      </ns1:result>
    </ns1:listRecurringDetailsResponse>
  </soap:Body>
</soap:Envelope>"#;
