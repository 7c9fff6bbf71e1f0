use axum::{
    extract::{Form, State},
    response::IntoResponse,
};
use serde::Deserialize;
use validator::{Validate, ValidationErrors};

use crate::contact::{ContactController, Field, FormFields, Status};
use crate::routes::AppState;
use crate::template::Template;

#[derive(askama::Template)]
#[template(path = "partials/contact_form.html")]
pub struct ContactFormTemplate {
    pub form: FormFields,
    pub success: bool,
    pub error: Option<String>,
}

impl ContactFormTemplate {
    fn idle() -> Self {
        Self {
            form: FormFields::default(),
            success: false,
            error: None,
        }
    }

    fn from_controller(controller: &ContactController) -> Self {
        Self {
            form: controller.fields(),
            success: controller.status() == Status::Success,
            error: controller.error_message(),
        }
    }
}

/// GET /contact/form - idle form fragment, fetched when the success banner
/// times out.
pub async fn form(template: Template) -> impl IntoResponse {
    template.render(ContactFormTemplate::idle())
}

#[derive(Deserialize, Validate)]
pub struct ActionInput {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
}

// Fields are reported in form order, so the surfaced message is stable when
// several fields fail at once.
const FIELD_ORDER: [&str; 3] = ["name", "email", "message"];

fn first_message(errors: &ValidationErrors) -> String {
    let by_field = errors.field_errors();
    FIELD_ORDER
        .iter()
        .filter_map(|field| by_field.get(*field))
        .flat_map(|field| field.iter())
        .filter_map(|error| error.message.as_ref())
        .map(|message| message.to_string())
        .next()
        .unwrap_or_else(|| "Please fill in all fields".to_string())
}

/// POST /contact - one submission attempt. Renders the re-rendered form
/// fragment whatever the outcome; errors never escape this handler.
///
/// The controller lives for this one request: the fragment snapshots its
/// state and the success banner's auto-dismiss drives the revert to the idle
/// form. The controller's own timer only matters for long-lived embeddings.
pub async fn action(
    template: Template,
    State(state): State<AppState>,
    Form(input): Form<ActionInput>,
) -> impl IntoResponse {
    if let Err(errors) = input.validate() {
        return template.render(ContactFormTemplate {
            form: FormFields {
                name: input.name,
                email: input.email,
                message: input.message,
            },
            success: false,
            error: Some(first_message(&errors)),
        });
    }

    let controller =
        ContactController::new(state.relay.clone(), state.config.relay.to_email.clone());
    controller.update_field(Field::Name, input.name);
    controller.update_field(Field::Email, input.email);
    controller.update_field(Field::Message, input.message);

    controller.submit().await;

    template.render(ContactFormTemplate::from_controller(&controller))
}
