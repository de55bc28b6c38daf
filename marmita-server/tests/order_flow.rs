//! End-to-end order flow: pricing, composition and the status lifecycle
//! driven through the HTTP router against an in-memory database.
//! Run: cargo test -p marmita-server --test order_flow

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use marmita_server::{Config, ServerState, build_app};
use serde_json::{Value, json};
use tower::ServiceExt;

async fn test_app() -> Router {
    let mut config = Config::from_env();
    config.delivery_fee_cents = 1000;
    let state = ServerState::initialize_in_memory(&config).await.unwrap();
    build_app().with_state(state)
}

async fn request(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(v) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(v.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

/// Seed a composite meal box plus its components
async fn seed_catalog(app: &Router) {
    let (status, _) = request(
        app,
        "POST",
        "/produtos",
        Some(json!({
            "nome": "Marmita Grande",
            "descricao": "Monte sua marmita",
            "preco_centavos": 2600,
            "imagem_url": "",
            "categoria": "MARMITAS",
            "ativo": true,
            "tipo": "COMPOSTO",
            "regras_composicao": {"max_base": 1, "max_proteina": 1, "max_guarnicao": 2},
            "tags_dieteticas": []
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    for (nome, tipo) in [
        ("Arroz Branco", "BASE"),
        ("Frango Grelhado", "PROTEINA"),
        ("Carne Moida", "PROTEINA"),
        ("Farofa", "GUARNICAO"),
    ] {
        let (status, _) = request(
            app,
            "POST",
            "/componentes",
            Some(json!({
                "nome": nome,
                "tipo": tipo,
                "embalagem_separada": false,
                "preco_adicional_centavos": 0,
                "ativo": true,
                "tags_dieteticas": []
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }
}

fn order_payload(modality: &str, with_address: bool) -> Value {
    let mut payload = json!({
        "cliente": {"nome": "Ana Souza", "telefone": "11 99999-0000"},
        "modalidade": modality,
        "forma_pagamento": "PIX",
        "itens": [{
            "nome_produto": "Marmita Grande",
            "quantidade": 1,
            "preco_unitario": 2600,
            "selecoes": ["Arroz Branco", "Frango Grelhado", "Farofa"]
        }]
    });
    if with_address {
        payload["entrega"] = json!({
            "logradouro": "Rua das Flores",
            "numero": "102",
            "bairro": "Centro"
        });
    }
    payload
}

#[tokio::test]
async fn delivery_order_computes_totals_and_initial_status() {
    let app = test_app().await;
    seed_catalog(&app).await;

    let (status, order) =
        request(&app, "POST", "/pedidos", Some(order_payload("DELIVERY", true))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(order["valor_produtos_centavos"], 2600);
    assert_eq!(order["taxa_entrega_centavos"], 1000);
    assert_eq!(order["valor_total_centavos"], 3600);
    assert_eq!(order["status"], "RECEBIDO");
    assert!(order["codigo_pedido"].as_i64().unwrap() > 0);
    assert!(order["id"].as_str().unwrap().starts_with("pedido:"));
}

#[tokio::test]
async fn pickup_order_has_no_delivery_fee() {
    let app = test_app().await;
    seed_catalog(&app).await;

    let (status, order) =
        request(&app, "POST", "/pedidos", Some(order_payload("RETIRADA", false))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(order["taxa_entrega_centavos"], 0);
    assert_eq!(order["valor_total_centavos"], 2600);
}

#[tokio::test]
async fn delivery_without_address_rejected() {
    let app = test_app().await;
    seed_catalog(&app).await;

    let (status, body) =
        request(&app, "POST", "/pedidos", Some(order_payload("DELIVERY", false))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 4005);
}

#[tokio::test]
async fn address_on_pickup_order_rejected() {
    let app = test_app().await;
    seed_catalog(&app).await;

    let (status, _) =
        request(&app, "POST", "/pedidos", Some(order_payload("RETIRADA", true))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_product_rejected_with_404() {
    let app = test_app().await;
    seed_catalog(&app).await;

    let mut payload = order_payload("RETIRADA", false);
    payload["itens"][0]["nome_produto"] = json!("Marmita Fantasma");

    let (status, body) = request(&app, "POST", "/pedidos", Some(payload)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 3001);
}

#[tokio::test]
async fn protein_cap_enforced() {
    let app = test_app().await;
    seed_catalog(&app).await;

    let mut payload = order_payload("RETIRADA", false);
    payload["itens"][0]["selecoes"] =
        json!(["Arroz Branco", "Frango Grelhado", "Carne Moida"]);

    let (status, body) = request(&app, "POST", "/pedidos", Some(payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 4003);
}

#[tokio::test]
async fn unknown_selection_rejected() {
    let app = test_app().await;
    seed_catalog(&app).await;

    let mut payload = order_payload("RETIRADA", false);
    payload["itens"][0]["selecoes"] = json!(["Arroz Branco", "Salada Fantasma"]);

    let (status, _) = request(&app, "POST", "/pedidos", Some(payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn zero_quantity_rejected() {
    let app = test_app().await;
    seed_catalog(&app).await;

    let mut payload = order_payload("RETIRADA", false);
    payload["itens"][0]["quantidade"] = json!(0);

    let (status, _) = request(&app, "POST", "/pedidos", Some(payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn status_advances_only_forward_step_by_step() {
    let app = test_app().await;
    seed_catalog(&app).await;

    let (_, order) =
        request(&app, "POST", "/pedidos", Some(order_payload("RETIRADA", false))).await;
    let id = order["id"].as_str().unwrap().to_string();
    let status_uri = format!("/pedidos/{}/status", id);

    // Skipping a step is rejected
    let (status, body) = request(
        &app,
        "PATCH",
        &status_uri,
        Some(json!({"status": "PRONTO"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], 4004);

    // Walking the lifecycle in order succeeds
    for next in ["EM_PREPARO", "PRONTO", "ENTREGUE"] {
        let (status, updated) =
            request(&app, "PATCH", &status_uri, Some(json!({"status": next}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["status"], next);
    }

    // Backward and out-of-terminal moves are rejected
    let (status, _) = request(
        &app,
        "PATCH",
        &status_uri,
        Some(json!({"status": "EM_PREPARO"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn order_codes_strictly_increase() {
    let app = test_app().await;
    seed_catalog(&app).await;

    let (_, first) =
        request(&app, "POST", "/pedidos", Some(order_payload("RETIRADA", false))).await;
    let (_, second) =
        request(&app, "POST", "/pedidos", Some(order_payload("RETIRADA", false))).await;

    let first_code = first["codigo_pedido"].as_i64().unwrap();
    let second_code = second["codigo_pedido"].as_i64().unwrap();
    assert!(second_code > first_code);
}

#[tokio::test]
async fn order_read_endpoints() {
    let app = test_app().await;
    seed_catalog(&app).await;

    let (_, order) =
        request(&app, "POST", "/pedidos", Some(order_payload("RETIRADA", false))).await;
    let id = order["id"].as_str().unwrap().to_string();

    let (status, fetched) = request(&app, "GET", &format!("/pedidos/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["codigo_pedido"], order["codigo_pedido"]);

    let (status, listed) = request(&app, "GET", "/pedidos", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let (status, _) = request(&app, "GET", "/pedidos/pedido:inexistente", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
