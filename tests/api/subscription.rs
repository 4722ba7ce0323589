use crate::helpers::{spawn_app, valid_subscription_body};

#[tokio::test]
async fn subscribe_returns_200_and_the_gateway_parameters_for_valid_data() {
    let app = spawn_app().await;

    let resp = app.post_subscriptions(&valid_subscription_body()).await;

    assert_eq!(200, resp.status().as_u16());

    let body: serde_json::Value = resp.json().await.expect("failed to parse response body");
    assert_eq!(body["gateway_url"], app.gateway_url.as_str());

    let parameters = &body["parameters"];
    assert_eq!(parameters["PSPID"], "merchant_test");
    assert_eq!(parameters["currency"], "EUR");
    assert_eq!(parameters["orderid"], "order-1001");
    assert_eq!(parameters["amount"], 0);
    assert_eq!(parameters["SUBSCRIPTION_ID"], "sub_le_guin_1");
    assert_eq!(parameters["SUB_AMOUNT"], 1299);
    assert_eq!(parameters["SUB_COM"], "Monthly newsletter plan");
    assert_eq!(parameters["SUB_PERIOD_UNIT"], "m");
    assert_eq!(parameters["SUB_PERIOD_NUMBER"], 1);
    assert_eq!(parameters["SUB_PERIOD_MOMENT"], 28);
    assert_eq!(parameters["SUB_STARTDATE"], "2026-11-01");
    assert_eq!(parameters["SUB_ENDDATE"], "2027-10-31");
    assert_eq!(parameters["SUB_STATUS"], 1);
    assert_eq!(parameters["SUB_COMMENT"], "first year");
}

#[tokio::test]
async fn subscribe_returns_400_when_a_field_breaks_its_rule() {
    let app = spawn_app().await;

    let test_cases = vec![
        ("subscription_id", serde_json::json!("sub le guin"), "id with a space"),
        ("subscription_amount", serde_json::json!(0), "zero subscription amount"),
        ("amount", serde_json::json!(-1), "negative amount"),
        ("description", serde_json::json!("plan!"), "description with punctuation"),
        ("subscription_order_id", serde_json::json!("o".repeat(41)), "order id too long"),
        ("status", serde_json::json!(2), "unknown status"),
        ("email", serde_json::json!("not-an-email"), "invalid email"),
        (
            "period",
            serde_json::json!({ "unit": "ww", "interval": 1, "moment": 8 }),
            "weekly moment past sunday",
        ),
        (
            "period",
            serde_json::json!({ "unit": "m", "interval": 1, "moment": 29 }),
            "monthly moment past the 28th",
        ),
        (
            "period",
            serde_json::json!({ "unit": "y", "interval": 1, "moment": 1 }),
            "unknown period unit",
        ),
    ];

    for (field, value, desc) in test_cases {
        let mut body = valid_subscription_body();
        body[field] = value;

        let resp = app.post_subscriptions(&body).await;

        assert_eq!(
            400,
            resp.status().as_u16(),
            "The API did not fail with 400 Bad Request for a payload with {}",
            desc
        );
    }
}

#[tokio::test]
async fn subscribe_returns_400_when_a_required_field_is_empty() {
    let app = spawn_app().await;

    let mut body = valid_subscription_body();
    body["description"] = serde_json::json!("");

    let resp = app.post_subscriptions(&body).await;

    assert_eq!(400, resp.status().as_u16());
    let message = resp.text().await.expect("failed to read response body");
    assert_eq!(message, "SUB_COM can not be empty.");
}

#[tokio::test]
async fn subscribe_accepts_daily_moments_beyond_a_month() {
    let app = spawn_app().await;

    let mut body = valid_subscription_body();
    body["period"] = serde_json::json!({ "unit": "d", "interval": 5, "moment": 100 });

    let resp = app.post_subscriptions(&body).await;

    assert_eq!(200, resp.status().as_u16());
}

#[tokio::test]
async fn subscribe_rejects_malformed_payloads() {
    let app = spawn_app().await;

    let test_cases = vec![
        (serde_json::json!({}), "empty object"),
        (
            {
                let mut body = valid_subscription_body();
                body.as_object_mut().unwrap().remove("period");
                body
            },
            "missing period",
        ),
        (
            {
                let mut body = valid_subscription_body();
                body["start_date"] = serde_json::json!("01/11/2026");
                body
            },
            "date in the wrong format",
        ),
    ];

    for (body, desc) in test_cases {
        let resp = app.post_subscriptions(&body).await;

        assert_eq!(
            400,
            resp.status().as_u16(),
            "The API did not fail with 400 Bad Request for a payload with {}",
            desc
        );
    }
}
