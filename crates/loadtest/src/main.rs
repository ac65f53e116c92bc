use goose::prelude::*;
use std::env;

struct MemberToken(String);

async fn status(user: &mut GooseUser) -> TransactionResult {
    let _goose_metrics = user.get("/api/status").await?;
    Ok(())
}

async fn get_hours(user: &mut GooseUser) -> TransactionResult {
    let _goose_metrics = user.get("/api/hours").await?;
    Ok(())
}

async fn get_holidays(user: &mut GooseUser) -> TransactionResult {
    let _goose_metrics = user.get("/api/holidays").await?;
    Ok(())
}

async fn get_events(user: &mut GooseUser) -> TransactionResult {
    let _goose_metrics = user.get("/api/events").await?;
    Ok(())
}

/// Log in once per user with `MEMBER_EMAIL`/`MEMBER_PASSWORD` and keep the token.
async fn login(user: &mut GooseUser) -> TransactionResult {
    let email = env::var("MEMBER_EMAIL").unwrap_or_else(|_| "loadtest@example.org".to_string());
    let password = env::var("MEMBER_PASSWORD").unwrap_or_else(|_| "loadtest-password".to_string());
    let params = [("username", email.as_str()), ("password", password.as_str())];

    let goose = user.post_form("/api/login", &params).await?;
    if let Ok(response) = goose.response {
        if let Ok(body) = response.json::<serde_json::Value>().await {
            if let Some(token) = body["access_token"].as_str() {
                user.set_session_data(MemberToken(token.to_string()));
            }
        }
    }
    Ok(())
}

async fn get_newsletter(user: &mut GooseUser) -> TransactionResult {
    let Some(token) = user.get_session_data::<MemberToken>().map(|t| t.0.clone()) else {
        return Ok(());
    };
    let language = env::var("NEWSLETTER_LANGUAGE").unwrap_or_else(|_| "en-US".to_string());
    let request_builder = user
        .get_request_builder(&GooseMethod::Get, "/api/newsletter")?
        .bearer_auth(token)
        .header("Accept-Language", language);
    let goose_request = GooseRequest::builder()
        .set_request_builder(request_builder)
        .build();
    let _goose_metrics = user.request(goose_request).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), GooseError> {
    if env::var("MEMBER_EMAIL").is_err() {
        println!("No MEMBER_EMAIL set; the Member scenario uses 'loadtest@example.org'");
    }

    GooseAttack::initialize()?
        .register_scenario(scenario!("Status").register_transaction(transaction!(status)))
        .register_scenario(
            scenario!("PublicCalendar")
                .register_transaction(transaction!(get_hours))
                .register_transaction(transaction!(get_holidays))
                .register_transaction(transaction!(get_events)),
        )
        .register_scenario(
            scenario!("Member")
                .register_transaction(transaction!(login).set_on_start())
                .register_transaction(transaction!(get_newsletter)),
        )
        .execute()
        .await?;

    Ok(())
}
