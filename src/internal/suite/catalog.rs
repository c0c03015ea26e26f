// src/internal/suite/catalog.rs

use serde_json::json;

use super::case::TestCase;
use crate::internal::assertions::Expectation;
use crate::internal::config::Fixtures;
use crate::internal::requester::ApiRequest;

pub const GET_LIST_USERS_SCHEMA: &str = "get_list_users.json";
pub const GET_SINGLE_USER_SCHEMA: &str = "get_single_user.json";
pub const POST_CREATE_USER_SCHEMA: &str = "post_create_user.json";
pub const REGISTER_SUCCESSFUL_SCHEMA: &str = "register_successful.json";
pub const REGISTER_UNSUCCESSFUL_SCHEMA: &str = "register_unsuccessful.json";
pub const DELAYED_RESPONSE_SCHEMA: &str = "delayed_response.json";

/// The reqres suite, with dataset literals taken from `fixtures`
pub fn catalog(fixtures: &Fixtures) -> Vec<TestCase> {
    let first_user = fixtures.user_ids.first().copied().unwrap_or(1);

    let mut cases = vec![
        TestCase::new(
            "get_list_users_successfully",
            ApiRequest::get("/users").query("page", fixtures.list_page),
        )
        .expect_status(200)
        .expect_schema(GET_LIST_USERS_SCHEMA),
        TestCase::new(
            "get_single_user_successfully",
            ApiRequest::get(format!("/users/{}", first_user)),
        )
        .expect_status(200)
        .expect_schema(GET_SINGLE_USER_SCHEMA),
        TestCase::new(
            "get_single_user_not_found",
            ApiRequest::get(format!("/users/{}", fixtures.missing_user_id)),
        )
        .expect_status(404)
        .expect(Expectation::Reason("Not Found".to_string()))
        .expect(Expectation::Body(json!({}))),
        TestCase::new(
            "post_create_user",
            ApiRequest::post("/users")
                .form_field("name", fixtures.person_name.as_str())
                .form_field("job", fixtures.create_job.as_str()),
        )
        .expect_status(201)
        .expect_schema(POST_CREATE_USER_SCHEMA),
        TestCase::new(
            "put_update_user",
            ApiRequest::put(format!("/users/{}", fixtures.put_user_id))
                .form_field("name", fixtures.person_name.as_str())
                .form_field("job", fixtures.update_job.as_str()),
        )
        .expect_status(200)
        .expect(Expectation::field("/name", fixtures.person_name.as_str()))
        .expect(Expectation::field("/job", fixtures.update_job.as_str())),
        TestCase::new(
            "patch_user",
            ApiRequest::patch(format!("/users/{}", fixtures.patch_user_id))
                .form_field("name", fixtures.person_name.as_str())
                .form_field("job", fixtures.update_job.as_str()),
        )
        .expect_status(200)
        .expect(Expectation::field("/name", fixtures.person_name.as_str()))
        .expect(Expectation::field("/job", fixtures.update_job.as_str())),
        TestCase::new(
            "delete_users",
            ApiRequest::delete("/users").query("page", fixtures.list_page),
        )
        .expect_status(204)
        .expect(Expectation::Reason("No Content".to_string()))
        .expect(Expectation::EmptyBody),
        TestCase::new(
            "post_register_successful",
            ApiRequest::post("/register")
                .form_field("email", fixtures.register_email.as_str())
                .form_field("password", fixtures.register_password.as_str()),
        )
        .expect_status(200)
        .expect(Expectation::field("/id", fixtures.register_id))
        .expect(Expectation::field("/token", fixtures.register_token.as_str()))
        .expect_schema(REGISTER_SUCCESSFUL_SCHEMA),
        TestCase::new(
            "post_register_unsuccessful",
            ApiRequest::post("/register").form_field("email", fixtures.unregistered_email.as_str()),
        )
        .expect_status(400)
        .expect_schema(REGISTER_UNSUCCESSFUL_SCHEMA),
        TestCase::new(
            "get_delayed_response",
            ApiRequest::get("/users").query("delay", fixtures.delay_secs),
        )
        .expect_status(200)
        .expect(Expectation::field("/per_page", fixtures.default_per_page))
        .expect(Expectation::field("/total", fixtures.total_users))
        .expect_schema(DELAYED_RESPONSE_SCHEMA),
    ];

    cases.extend(fixtures.user_ids.iter().map(|id| {
        TestCase::new(
            format!("get_single_user_id_{}", id),
            ApiRequest::get(format!("/users/{}", id)),
        )
        .expect(Expectation::field("/data/id", *id))
    }));

    cases.push(
        TestCase::new(
            "list_of_users_pagination",
            ApiRequest::get("/users").query("page", fixtures.pagination_page),
        )
        .expect(Expectation::field("/page", fixtures.pagination_page)),
    );

    cases.push(
        TestCase::new(
            "list_of_users_per_page",
            ApiRequest::get("/users")
                .query("page", fixtures.paging_page)
                .query("per_page", fixtures.paging_per_page)
                .header("Content-Type", "application/json")
                .header("Connection", "keep-alive"),
        )
        .expect(Expectation::field("/per_page", fixtures.paging_per_page))
        .expect(Expectation::length("/data", fixtures.paging_per_page as usize)),
    );

    cases
}

/// Keep the cases whose name contains `filter`
pub fn select(cases: Vec<TestCase>, filter: Option<&str>) -> Vec<TestCase> {
    match filter {
        Some(text) if !text.is_empty() => cases
            .into_iter()
            .filter(|case| case.name.contains(text))
            .collect(),
        _ => cases,
    }
}
