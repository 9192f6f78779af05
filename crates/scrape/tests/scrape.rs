// ABOUTME: End-to-end tests running the scraper over a saved copy of the Bot API page.
// ABOUTME: Checks the catalog shape, return-type inference and the diagnostics a real page produces.

use botapi_scrape::{
    catalog_to_json, walk_document, Diagnostic, MethodParam, Scraper, TypeField,
};
use httpmock::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::fs;

fn load_fixture(name: &str) -> String {
    let path = format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path, e))
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn single_type_with_one_field() {
    let html = r##"<html><body><div id="dev_page_content">
<h4><a class="anchor" name="user" href="#user"><i class="anchor-icon"></i></a>User</h4>
<table class="table">
<thead><tr><th>Field</th><th>Type</th><th>Description</th></tr></thead>
<tbody><tr><td>id</td><td>Integer</td><td>Unique identifier</td></tr></tbody>
</table>
</div></body></html>"##;

    let walk = walk_document(html).unwrap();
    let value: Value = serde_json::from_str(&catalog_to_json(&walk.catalog).unwrap()).unwrap();
    assert_eq!(
        value["types"]["User"]["fields"],
        json!([{"field": "id", "types": ["Integer"], "description": "Unique identifier"}])
    );
}

#[test]
fn fixture_types_and_fields() {
    let report = Scraper::builder()
        .build()
        .scrape_html(&load_fixture("botapi.html"))
        .unwrap();
    let catalog = &report.catalog;

    assert_eq!(
        catalog.types.keys().collect::<Vec<_>>(),
        vec!["Message", "Update", "User"]
    );
    assert_eq!(
        catalog.types["Update"].description,
        strings(&["This object represents an incoming update."])
    );
    assert_eq!(
        catalog.types["Message"].fields[2],
        TypeField {
            field: "text".to_string(),
            types: strings(&["String"]),
            description: "Optional. For text messages, the actual UTF-8 text, e.g. \"/start\""
                .to_string(),
        }
    );
    assert_eq!(
        catalog.methods["sendMessage"].fields[0],
        MethodParam {
            parameter: "chat_id".to_string(),
            types: strings(&["Integer", "String"]),
            required: "Yes".to_string(),
            description: "Unique identifier for the target chat".to_string(),
        }
    );
}

#[test]
fn fixture_return_types() {
    let report = Scraper::builder()
        .build()
        .scrape_html(&load_fixture("botapi.html"))
        .unwrap();
    let returns = |m: &str| report.catalog.methods[m].returns.clone();

    assert_eq!(returns("getUpdates"), strings(&["Array of Update"]));
    assert_eq!(returns("getMe"), strings(&["User"]));
    assert_eq!(returns("sendMessage"), strings(&["Message"]));
    assert_eq!(returns("sendMediaGroup"), strings(&["Array of Message"]));
    assert_eq!(returns("editMessageText"), strings(&["Message", "Boolean"]));
    assert!(returns("logOut").is_empty());
}

#[test]
fn fixture_sub_headings_are_not_entities() {
    let report = Scraper::builder()
        .build()
        .scrape_html(&load_fixture("botapi.html"))
        .unwrap();
    let catalog = &report.catalog;

    assert!(!catalog.types.contains_key("October 31, 2024"));
    assert!(!catalog.types.contains_key("Formatting options"));
    assert_eq!(
        catalog.methods["sendMessage"].description.last().map(String::as_str),
        Some("The Bot API supports basic formatting for messages.")
    );
}

#[test]
fn fixture_diagnostics() {
    let report = Scraper::builder()
        .build()
        .scrape_html(&load_fixture("botapi.html"))
        .unwrap();

    assert_eq!(
        report.diagnostics,
        vec![
            Diagnostic::ReturnTypeNotFound {
                method: "logOut".to_string()
            },
            Diagnostic::UnknownFieldType {
                owner: "User".to_string(),
                field: "photo".to_string(),
                type_name: "ChatPhoto".to_string(),
            },
            Diagnostic::MultipleReturnTypes {
                method: "editMessageText".to_string(),
                returns: strings(&["Message", "Boolean"]),
            },
            Diagnostic::NoReturnTypes {
                method: "logOut".to_string()
            },
            Diagnostic::UnknownParamType {
                method: "sendMessage".to_string(),
                parameter: "reply_markup".to_string(),
                type_name: "InlineKeyboardMarkup".to_string(),
            },
            Diagnostic::UnknownParamType {
                method: "sendMessage".to_string(),
                parameter: "reply_markup".to_string(),
                type_name: "ForceReply".to_string(),
            },
        ]
    );
}

#[test]
fn scrape_fetches_configured_url() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/bots/api");
        then.status(200)
            .header("content-type", "text/html; charset=utf-8")
            .body(load_fixture("botapi.html"));
    });

    let report = Scraper::builder()
        .url(server.url("/bots/api"))
        .build()
        .scrape()
        .unwrap();
    mock.assert();

    assert_eq!(report.catalog.types.len(), 3);
    assert_eq!(report.catalog.methods.len(), 6);
}

#[test]
fn malformed_table_is_fatal() {
    let html = r#"<html><body><div id="dev_page_content">
<h4><a name="getme"></a>getMe</h4>
<p>Returns basic information about the bot in form of a User object.</p>
<table><tbody><tr><td>id</td><td>Integer</td><td>Identifier</td></tr></tbody></table>
</div></body></html>"#;

    let err = Scraper::builder().build().scrape_html(html).unwrap_err();
    assert!(err.is_table_shape());
    let msg = err.to_string();
    assert!(msg.contains("method getMe"), "{msg}");
    assert!(msg.contains("3 cells"), "{msg}");
}
