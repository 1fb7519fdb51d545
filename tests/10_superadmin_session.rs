mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn superadmin_login_me_logout_flow() -> Result<()> {
    let server = common::start_server(&[
        ("SUPERADMIN_USERNAME", "root"),
        ("SUPERADMIN_PASSWORD", "hunter2hunter2"),
    ])
    .await?;
    let client = common::client();

    // Wrong credentials: generic 401, no cookie
    let res = client
        .post(format!("{}/api/superadmin/login", server.base_url))
        .json(&json!({ "username": "root", "password": "wrong" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert!(common::set_cookie_value(&res, "sa_session").is_none());
    let body: Value = res.json().await?;
    assert_eq!(body["ok"], json!(false));
    assert_eq!(body["message"], json!("Invalid credentials"));

    // Correct credentials: 200 + sa_session cookie with the contract attributes
    let res = client
        .post(format!("{}/api/superadmin/login", server.base_url))
        .json(&json!({ "username": "root", "password": "hunter2hunter2" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let header = common::set_cookie_header(&res, "sa_session").expect("Set-Cookie present");
    assert!(header.contains("HttpOnly"), "missing HttpOnly: {header}");
    assert!(header.contains("SameSite=Lax"), "missing SameSite: {header}");
    assert!(header.contains("Path=/"), "missing Path: {header}");
    assert!(!header.contains("Secure"), "Secure must be off outside production: {header}");
    let token = common::set_cookie_value(&res, "sa_session").unwrap();
    let body: Value = res.json().await?;
    assert_eq!(body["ok"], json!(true));

    // Session probe with the cookie
    let res = client
        .get(format!("{}/api/superadmin/me", server.base_url))
        .header("Cookie", format!("sa_session={token}"))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body["ok"], json!(true));
    assert_eq!(body["user"]["role"], json!("superadmin"));
    assert!(body["user"]["exp"].as_i64().unwrap() > body["user"]["iat"].as_i64().unwrap());

    // The super-admin cookie must not open the tenant-tier probe
    let res = client
        .get(format!("{}/api/admin/me", server.base_url))
        .header("Cookie", format!("admin_session={token}"))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    // Logout clears the cookie
    let res = client
        .post(format!("{}/api/superadmin/logout", server.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let header = common::set_cookie_header(&res, "sa_session").expect("Set-Cookie present");
    assert!(header.starts_with("sa_session=;"), "cookie not emptied: {header}");
    assert!(header.contains("Max-Age=0"), "cookie not expired: {header}");

    // Probe without the cookie fails
    let res = client
        .get(format!("{}/api/superadmin/me", server.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
async fn malformed_login_body_is_a_bad_request() -> Result<()> {
    let server = common::start_server(&[]).await?;
    let client = common::client();

    let res = client
        .post(format!("{}/api/superadmin/login", server.base_url))
        .header("Content-Type", "application/json")
        .body("{not json")
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await?;
    assert_eq!(body["ok"], json!(false));

    Ok(())
}
