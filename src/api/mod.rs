use crate::models::Course;
use crate::types::*;
use leptos::prelude::*;

/// Course detail lookup. Resolves to `None` for unknown ids; the delay and
/// cancellation come from the `CourseLookup` the server provides as context.
#[server(GetCourse, "/api")]
pub async fn get_course(id: String) -> Result<Option<Course>, ServerFnError> {
    use crate::common::CatalogError;
    use crate::services::lookup::CourseLookup;

    let lookup = use_context::<CourseLookup>().unwrap_or_default();
    match lookup.fetch(&id).await {
        Ok(course) => Ok(Some(course)),
        Err(CatalogError::NotFound(_)) => Ok(None),
        Err(err @ CatalogError::Cancelled) => Err(ServerFnError::new(err)),
    }
}

/// Sign-in server function. Any well-formed email with a long enough password
/// is accepted; there is no account store behind it.
#[server(SignIn, "/api")]
pub async fn sign_in(
    email: String,
    password: String,
    name: Option<String>,
) -> Result<SessionUser, ServerFnError> {
    use crate::services::auth::validate_credentials;

    if let Err(err) = validate_credentials(&email, &password) {
        tracing::debug!(%email, %err, "sign-in rejected");
        return Err(ServerFnError::new(err));
    }

    let name = name
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty());

    tracing::info!(%email, "signed in");
    Ok(SessionUser {
        name,
        email: email.trim().to_string(),
    })
}

/// Newsletter subscription. Only validates the address.
#[server(Subscribe, "/api")]
pub async fn subscribe(email: String) -> Result<SubscribeResponse, ServerFnError> {
    use crate::services::auth::validate_email;

    validate_email(&email).map_err(ServerFnError::new)?;
    let email = email.trim().to_string();
    tracing::info!(%email, "newsletter subscription");

    Ok(SubscribeResponse {
        message: format!("Thanks for subscribing! Updates will be sent to {email}."),
        email,
    })
}
