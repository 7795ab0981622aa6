//! Per-form validation rules.
//!
//! Each form has one pure function that checks a [`FormSubmission`] and
//! either produces the typed, validated field set or the exact message the
//! user sees next to the form. The functions touch nothing but the map:
//! no framework types, no I/O, so validating the same submission twice
//! always yields the same outcome.

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

use crate::application::form::{FormSubmission, ValidationError};

/// User-facing validation messages.
///
/// These are the product's exact strings; tests assert on them verbatim.
pub mod messages {
    pub const LOGIN_FIELDS_REQUIRED: &str = "Email y contraseña son requeridos";
    pub const ALL_FIELDS_REQUIRED: &str = "Todos los campos son requeridos";
    pub const PASSWORDS_DO_NOT_MATCH: &str = "Las contraseñas no coinciden";
    pub const ORIGINAL_URL_REQUIRED: &str = "La URL original es requerida";
    pub const ORIGINAL_URL_INVALID: &str = "Por favor ingresa una URL válida";
    pub const CUSTOM_SLUG_INVALID: &str = "El slug personalizado no es válido";
    pub const PROFILE_FIELDS_REQUIRED: &str = "Nombre y email son requeridos";
    pub const DEFAULT_DOMAIN_REQUIRED: &str = "El dominio por defecto es requerido";
    pub const UNKNOWN_INTENT: &str = "Acción no reconocida";
}

/// Slugs are lowercase alphanumerics and dashes, 4 to 50 characters.
static SLUG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-z0-9-]{4,50}$").unwrap());

fn err(message: &str) -> ValidationError {
    ValidationError(message.to_string())
}

/// Validated login form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginFields {
    pub email: String,
    pub password: String,
}

/// Login requires a non-blank email and password.
pub fn login(form: &FormSubmission) -> Result<LoginFields, ValidationError> {
    match (form.filled("email"), form.filled("password")) {
        (Some(email), Some(password)) => Ok(LoginFields {
            email: email.to_string(),
            password: password.to_string(),
        }),
        _ => Err(err(messages::LOGIN_FIELDS_REQUIRED)),
    }
}

/// Validated registration form.
///
/// The confirmation field is consumed by validation and never leaves it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterFields {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Registration requires every field and matching passwords.
pub fn register(form: &FormSubmission) -> Result<RegisterFields, ValidationError> {
    let (name, email, password, confirm) = match (
        form.filled("name"),
        form.filled("email"),
        form.filled("password"),
        form.filled("confirmPassword"),
    ) {
        (Some(n), Some(e), Some(p), Some(c)) => (n, e, p, c),
        _ => return Err(err(messages::ALL_FIELDS_REQUIRED)),
    };

    if password != confirm {
        return Err(err(messages::PASSWORDS_DO_NOT_MATCH));
    }

    Ok(RegisterFields {
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    })
}

/// Validated new-URL form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrlFields {
    pub original_url: String,
    pub custom_slug: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

/// The new-URL form requires a well-formed absolute HTTP(S) URL.
///
/// A missing URL and a malformed one produce different messages; the
/// optional slug, when present, must fit the slug pattern.
pub fn new_url(form: &FormSubmission) -> Result<NewUrlFields, ValidationError> {
    let original_url = form
        .filled("originalUrl")
        .ok_or_else(|| err(messages::ORIGINAL_URL_REQUIRED))?;

    let parsed = Url::parse(original_url).map_err(|_| err(messages::ORIGINAL_URL_INVALID))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(err(messages::ORIGINAL_URL_INVALID));
    }

    let custom_slug = form.filled("customSlug");
    if let Some(slug) = custom_slug
        && !SLUG_REGEX.is_match(slug)
    {
        return Err(err(messages::CUSTOM_SLUG_INVALID));
    }

    Ok(NewUrlFields {
        original_url: original_url.to_string(),
        custom_slug: custom_slug.map(str::to_string),
        title: form.filled("title").map(str::to_string),
        description: form.filled("description").map(str::to_string),
    })
}

/// Validated profile form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileFields {
    pub name: String,
    pub email: String,
}

/// Profile updates require a non-blank name and email.
pub fn profile(form: &FormSubmission) -> Result<ProfileFields, ValidationError> {
    match (form.filled("name"), form.filled("email")) {
        (Some(name), Some(email)) => Ok(ProfileFields {
            name: name.to_string(),
            email: email.to_string(),
        }),
        _ => Err(err(messages::PROFILE_FIELDS_REQUIRED)),
    }
}

/// Validated preferences form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferencesFields {
    pub default_domain: String,
    pub email_notifications: bool,
}

/// Preferences require a default domain; the notifications checkbox is
/// present in the body only when checked.
pub fn preferences(form: &FormSubmission) -> Result<PreferencesFields, ValidationError> {
    let default_domain = form
        .filled("defaultDomain")
        .ok_or_else(|| err(messages::DEFAULT_DOMAIN_REQUIRED))?;

    Ok(PreferencesFields {
        default_domain: default_domain.to_string(),
        email_notifications: form.has("emailNotifications"),
    })
}

/// Validated password-change form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangePasswordFields {
    pub current_password: String,
    pub new_password: String,
}

/// Password changes require every field and matching new passwords.
pub fn change_password(form: &FormSubmission) -> Result<ChangePasswordFields, ValidationError> {
    let (current, new, confirm) = match (
        form.filled("currentPassword"),
        form.filled("newPassword"),
        form.filled("confirmPassword"),
    ) {
        (Some(cur), Some(new), Some(confirm)) => (cur, new, confirm),
        _ => return Err(err(messages::ALL_FIELDS_REQUIRED)),
    };

    if new != confirm {
        return Err(err(messages::PASSWORDS_DO_NOT_MATCH));
    }

    Ok(ChangePasswordFields {
        current_password: current.to_string(),
        new_password: new.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(pairs: &[(&str, &str)]) -> FormSubmission {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_login_accepts_filled_credentials() {
        let fields = login(&form(&[("email", "a@b.com"), ("password", "x")])).unwrap();
        assert_eq!(fields.email, "a@b.com");
        assert_eq!(fields.password, "x");
    }

    #[test]
    fn test_login_rejects_blank_or_missing_fields() {
        let missing = login(&form(&[("password", "x")])).unwrap_err();
        assert_eq!(missing.message(), messages::LOGIN_FIELDS_REQUIRED);

        let blank = login(&form(&[("email", ""), ("password", "x")])).unwrap_err();
        assert_eq!(blank.message(), messages::LOGIN_FIELDS_REQUIRED);
    }

    #[test]
    fn test_login_is_idempotent() {
        let submission = form(&[("email", ""), ("password", "x")]);
        assert_eq!(login(&submission), login(&submission));
    }

    #[test]
    fn test_register_requires_every_field() {
        let result = register(&form(&[
            ("name", "Ana"),
            ("email", "ana@example.com"),
            ("password", "secreta123"),
        ]));
        assert_eq!(result.unwrap_err().message(), messages::ALL_FIELDS_REQUIRED);
    }

    #[test]
    fn test_register_rejects_mismatched_passwords() {
        let result = register(&form(&[
            ("name", "Ana"),
            ("email", "ana@example.com"),
            ("password", "secreta123"),
            ("confirmPassword", "secreta124"),
        ]));
        assert_eq!(result.unwrap_err().message(), messages::PASSWORDS_DO_NOT_MATCH);
    }

    #[test]
    fn test_register_accepts_matching_passwords() {
        let fields = register(&form(&[
            ("name", "Ana"),
            ("email", "ana@example.com"),
            ("password", "secreta123"),
            ("confirmPassword", "secreta123"),
        ]))
        .unwrap();
        assert_eq!(fields.name, "Ana");
        assert_eq!(fields.password, "secreta123");
    }

    #[test]
    fn test_new_url_distinguishes_missing_from_malformed() {
        let missing = new_url(&form(&[("title", "t")])).unwrap_err();
        assert_eq!(missing.message(), messages::ORIGINAL_URL_REQUIRED);

        let malformed = new_url(&form(&[("originalUrl", "not-a-url")])).unwrap_err();
        assert_eq!(malformed.message(), messages::ORIGINAL_URL_INVALID);
    }

    #[test]
    fn test_new_url_rejects_non_http_schemes() {
        let result = new_url(&form(&[("originalUrl", "javascript:alert(1)")]));
        assert_eq!(result.unwrap_err().message(), messages::ORIGINAL_URL_INVALID);
    }

    #[test]
    fn test_new_url_accepts_absolute_http_url() {
        let fields = new_url(&form(&[
            ("originalUrl", "https://example.com/page"),
            ("customSlug", "mi-enlace"),
            ("title", "Mi página"),
        ]))
        .unwrap();

        assert_eq!(fields.original_url, "https://example.com/page");
        assert_eq!(fields.custom_slug.as_deref(), Some("mi-enlace"));
        assert_eq!(fields.title.as_deref(), Some("Mi página"));
        assert_eq!(fields.description, None);
    }

    #[test]
    fn test_new_url_rejects_bad_slugs() {
        for slug in ["ab", "Con-Mayúsculas", "con espacios"] {
            let result = new_url(&form(&[
                ("originalUrl", "https://example.com"),
                ("customSlug", slug),
            ]));
            assert_eq!(result.unwrap_err().message(), messages::CUSTOM_SLUG_INVALID, "slug: {slug}");
        }
    }

    #[test]
    fn test_profile_requires_name_and_email() {
        let result = profile(&form(&[("name", "Ana")]));
        assert_eq!(result.unwrap_err().message(), messages::PROFILE_FIELDS_REQUIRED);
    }

    #[test]
    fn test_preferences_checkbox_presence_is_the_value() {
        let on = preferences(&form(&[
            ("defaultDomain", "short.ly"),
            ("emailNotifications", "on"),
        ]))
        .unwrap();
        assert!(on.email_notifications);

        let off = preferences(&form(&[("defaultDomain", "short.ly")])).unwrap();
        assert!(!off.email_notifications);
    }

    #[test]
    fn test_change_password_rejects_mismatch() {
        let result = change_password(&form(&[
            ("currentPassword", "vieja123"),
            ("newPassword", "nueva1234"),
            ("confirmPassword", "nueva12345"),
        ]));
        assert_eq!(result.unwrap_err().message(), messages::PASSWORDS_DO_NOT_MATCH);
    }

    #[test]
    fn test_change_password_accepts_matching_fields() {
        let fields = change_password(&form(&[
            ("currentPassword", "vieja123"),
            ("newPassword", "nueva1234"),
            ("confirmPassword", "nueva1234"),
        ]))
        .unwrap();
        assert_eq!(fields.new_password, "nueva1234");
    }
}
