use serde::Serialize;
use thiserror::Error;

const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

// Replace with real EmailJS credentials before deploying; submissions are
// rejected while any of these still holds its placeholder.
pub const SERVICE_ID: &str = "YOUR_SERVICE_ID";
pub const TEMPLATE_ID: &str = "YOUR_TEMPLATE_ID";
pub const PUBLIC_KEY: &str = "YOUR_PUBLIC_KEY";

const PLACEHOLDER_SERVICE_ID: &str = "YOUR_SERVICE_ID";
const PLACEHOLDER_TEMPLATE_ID: &str = "YOUR_TEMPLATE_ID";
const PLACEHOLDER_PUBLIC_KEY: &str = "YOUR_PUBLIC_KEY";

pub const CONTACT_EMAIL: &str = "bethebayou@gmail.com";
pub const CONTACT_PHONE: &str = "+251920420134";

const GENERIC_SEND_ERROR: &str = "Failed to send message. Please try again or email me directly.";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    #[error("Contact form is not configured yet - please use the email address above instead")]
    NotConfigured,
    #[error("{0}")]
    Send(String),
}

/// Caller-held EmailJS identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmailConfig {
    pub service_id: &'static str,
    pub template_id: &'static str,
    pub public_key: &'static str,
}

impl EmailConfig {
    pub const fn site() -> Self {
        Self {
            service_id: SERVICE_ID,
            template_id: TEMPLATE_ID,
            public_key: PUBLIC_KEY,
        }
    }

    /// Rejects the documented placeholder ids before any network attempt.
    pub fn validate(&self) -> Result<(), EmailError> {
        if self.service_id == PLACEHOLDER_SERVICE_ID
            || self.template_id == PLACEHOLDER_TEMPLATE_ID
            || self.public_key == PLACEHOLDER_PUBLIC_KEY
        {
            return Err(EmailError::NotConfigured);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub from_name: String,
    pub reply_to: String,
    pub message: String,
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

#[derive(Serialize)]
struct TemplateParams<'a> {
    from_name: &'a str,
    reply_to: &'a str,
    message: &'a str,
    to_email: &'a str,
}

/// One send attempt. Configuration problems short-circuit with zero network
/// calls; a provider failure surfaces the provider's response text when it
/// has one.
pub async fn send_contact_email(
    config: EmailConfig,
    msg: &ContactMessage,
) -> Result<(), EmailError> {
    config.validate()?;

    let body = SendRequest {
        service_id: config.service_id,
        template_id: config.template_id,
        user_id: config.public_key,
        template_params: TemplateParams {
            from_name: &msg.from_name,
            reply_to: &msg.reply_to,
            message: &msg.message,
            to_email: CONTACT_EMAIL,
        },
    };

    let resp = reqwest::Client::new()
        .post(EMAILJS_ENDPOINT)
        .json(&body)
        .send()
        .await
        .map_err(|e| {
            log::error!("email send failed: {e}");
            EmailError::Send(GENERIC_SEND_ERROR.to_string())
        })?;
    if resp.status().is_success() {
        return Ok(());
    }
    let detail = resp.text().await.unwrap_or_default();
    Err(EmailError::Send(if detail.is_empty() {
        GENERIC_SEND_ERROR.to_string()
    } else {
        detail
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> EmailConfig {
        EmailConfig {
            service_id: "service_abc123",
            template_id: "template_xyz789",
            public_key: "k-0123456789abcdef",
        }
    }

    #[test]
    fn placeholder_service_id_is_rejected() {
        let config = EmailConfig {
            service_id: PLACEHOLDER_SERVICE_ID,
            ..configured()
        };
        assert_eq!(config.validate(), Err(EmailError::NotConfigured));
    }

    #[test]
    fn placeholder_template_id_is_rejected() {
        let config = EmailConfig {
            template_id: PLACEHOLDER_TEMPLATE_ID,
            ..configured()
        };
        assert_eq!(config.validate(), Err(EmailError::NotConfigured));
    }

    #[test]
    fn placeholder_public_key_is_rejected() {
        let config = EmailConfig {
            public_key: PLACEHOLDER_PUBLIC_KEY,
            ..configured()
        };
        assert_eq!(config.validate(), Err(EmailError::NotConfigured));
    }

    #[test]
    fn real_identifiers_pass_validation() {
        assert_eq!(configured().validate(), Ok(()));
    }

    #[test]
    fn the_default_site_config_is_still_placeholder() {
        // Keeps the short-circuit honest until real credentials land.
        assert_eq!(EmailConfig::site().validate(), Err(EmailError::NotConfigured));
    }

    #[test]
    fn send_request_matches_the_emailjs_wire_shape() {
        let config = configured();
        let body = SendRequest {
            service_id: config.service_id,
            template_id: config.template_id,
            user_id: config.public_key,
            template_params: TemplateParams {
                from_name: "Ada",
                reply_to: "ada@example.com",
                message: "hello",
                to_email: CONTACT_EMAIL,
            },
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["service_id"], "service_abc123");
        assert_eq!(value["user_id"], "k-0123456789abcdef");
        assert_eq!(value["template_params"]["reply_to"], "ada@example.com");
        assert_eq!(value["template_params"]["to_email"], CONTACT_EMAIL);
    }
}
