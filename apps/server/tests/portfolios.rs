mod common;

use common::{body_json, get, send, test_app};

#[tokio::test]
async fn lists_seeded_portfolios() {
    let app = test_app().await;

    let body = body_json(send(&app, get("/api/portfolios")).await).await;
    let portfolios = body.as_array().unwrap();
    assert_eq!(portfolios.len(), 3);
    assert_eq!(portfolios[0]["name"], "Income Focused");
    assert_eq!(portfolios[0]["holdings"][0]["propertyId"], 1);
}

#[tokio::test]
async fn portfolio_history_is_weighted_sum_of_holdings() {
    let app = test_app().await;

    let response = send(&app, get("/api/portfolios/1/history")).await;
    assert_eq!(response.status(), 200);
    let history = body_json(response).await;
    let history = history.as_array().unwrap();
    assert_eq!(history.len(), 36);

    let first = body_json(send(&app, get("/api/properties/1")).await).await;
    let second = body_json(send(&app, get("/api/properties/2")).await).await;
    for (i, point) in history.iter().enumerate() {
        let a = &first["history"][i];
        let b = &second["history"][i];
        assert_eq!(point["date"], a["date"]);
        let expected = 0.7 * a["value"].as_f64().unwrap() + 0.3 * b["value"].as_f64().unwrap();
        assert!((point["value"].as_f64().unwrap() - expected).abs() < 1e-6);
    }
}

#[tokio::test]
async fn unknown_portfolio_history_is_not_found() {
    let app = test_app().await;

    let response = send(&app, get("/api/portfolios/9999/history")).await;
    assert_eq!(response.status(), 404);
    assert_eq!(body_json(response).await["code"], 404);
}

#[tokio::test]
async fn comparison_keeps_order_and_nulls_unknown_ids() {
    let app = test_app().await;

    let response = send(&app, get("/api/metrics/comparison?ids=2,9999,1")).await;
    assert_eq!(response.status(), 200);

    let body = body_json(response).await;
    let entries = body.as_array().unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0]["portfolioId"], 2);
    assert!(entries[1].is_null());
    assert_eq!(entries[2]["portfolioId"], 1);
    for key in ["totalValue", "totalReturn", "annualizedReturn", "capRate", "occupancy"] {
        assert!(entries[0][key].is_number(), "missing {key}");
    }

    let history = body_json(send(&app, get("/api/portfolios/1/history")).await).await;
    let last = history.as_array().unwrap().last().unwrap()["value"].as_f64().unwrap();
    assert!((entries[2]["totalValue"].as_f64().unwrap() - last).abs() < 1e-6);
}

#[tokio::test]
async fn comparison_requires_integer_ids() {
    let app = test_app().await;

    for uri in [
        "/api/metrics/comparison",
        "/api/metrics/comparison?ids=",
        "/api/metrics/comparison?ids=1,abc",
    ] {
        let response = send(&app, get(uri)).await;
        assert_eq!(response.status(), 400, "{uri}");
    }
}
