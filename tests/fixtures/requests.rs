use reqres_suite::internal::requester::ApiRequest;

pub const PERSON_NAME: &str = "Mariya Zhurova";
pub const CREATE_JOB: &str = "QA Engineer";
pub const UPDATE_JOB: &str = "QA Automation Engineer";

pub fn user_form(request: ApiRequest, job: &str) -> ApiRequest {
    request
        .form_field("name", PERSON_NAME)
        .form_field("job", job)
}

pub fn register(email: &str, password: Option<&str>) -> ApiRequest {
    let request = ApiRequest::post("/register").form_field("email", email);
    match password {
        Some(password) => request.form_field("password", password),
        None => request,
    }
}
