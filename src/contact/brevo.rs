use serde::Serialize;
use serde_json::Value;

use super::controller::SubmitError;
use super::form::ContactParams;

#[cfg(feature = "ssr")]
pub use client::BrevoMailer;

/// Who sends the mail, who receives it, and which template renders it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailConfig {
    pub api_key: String,
    pub endpoint: String,
    pub sender: Contact,
    pub recipient: Contact,
    pub template_id: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
    pub name: String,
    pub email: String,
}

/// Request body of the transactional-email endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailPayload<'a> {
    pub sender: &'a Contact,
    pub to: [&'a Contact; 1],
    pub template_id: u64,
    pub params: &'a ContactParams,
}

impl<'a> EmailPayload<'a> {
    pub fn new(config: &'a EmailConfig, params: &'a ContactParams) -> Self {
        Self {
            sender: &config.sender,
            to: [&config.recipient],
            template_id: config.template_id,
            params,
        }
    }
}

/// Maps the provider's status and body to a delivery verdict. The body must
/// be JSON of any shape; the status alone decides success. On failure a
/// `message` member, when present, becomes the reason.
pub fn interpret_response(status: u16, body: &str) -> Result<(), SubmitError> {
    let reply: Value =
        serde_json::from_str(body).map_err(|e| SubmitError::Decode(e.to_string()))?;
    if (200..300).contains(&status) {
        return Ok(());
    }
    match reply.get("message") {
        Some(Value::String(message)) if !message.is_empty() => {
            Err(SubmitError::Rejected(message.clone()))
        }
        Some(Value::Null) | Some(Value::String(_)) | None => Err(SubmitError::Status(status)),
        Some(other) => Err(SubmitError::Rejected(other.to_string())),
    }
}

#[cfg(feature = "ssr")]
mod client {
    use std::sync::Arc;

    use async_trait::async_trait;
    use reqwest::Client;

    use super::{interpret_response, EmailConfig, EmailPayload};
    use crate::contact::controller::{Mailer, SubmitError};
    use crate::contact::form::ContactParams;

    /// Server-side mailer. Cheap to clone; clones share the connection pool.
    #[derive(Debug, Clone)]
    pub struct BrevoMailer {
        client: Client,
        config: Arc<EmailConfig>,
    }

    impl BrevoMailer {
        pub fn new(config: EmailConfig) -> Self {
            Self {
                client: Client::new(),
                config: Arc::new(config),
            }
        }

        pub fn config(&self) -> &EmailConfig {
            &self.config
        }

        /// Posts one message. No retry and no client-side timeout.
        pub async fn deliver(&self, params: &ContactParams) -> Result<(), SubmitError> {
            let payload = EmailPayload::new(&self.config, params);
            tracing::info!(
                template_id = self.config.template_id,
                recipient = %self.config.recipient.email,
                "sending contact message"
            );

            let res = self
                .client
                .post(&self.config.endpoint)
                .header("accept", "application/json")
                .header("api-key", &self.config.api_key)
                .json(&payload)
                .send()
                .await
                .map_err(|e| SubmitError::Transport(e.to_string()))?;

            let status = res.status().as_u16();
            let body = res
                .text()
                .await
                .map_err(|e| SubmitError::Transport(e.to_string()))?;

            let verdict = interpret_response(status, &body);
            if let Err(e) = &verdict {
                tracing::warn!(status, error = %e, "email provider refused contact message");
            }
            verdict
        }
    }

    #[async_trait(?Send)]
    impl Mailer for BrevoMailer {
        async fn send(&self, params: &ContactParams) -> Result<(), SubmitError> {
            self.deliver(params).await
        }
    }
}


#[cfg(all(test, feature = "ssr"))]
mod client_tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::{Arc, Mutex};

    use axum::{
        body::Bytes,
        extract::State,
        http::{HeaderMap, StatusCode},
        routing::post,
        Router,
    };
    use serde_json::Value;
    use tokio::net::TcpListener;

    use super::*;
    use crate::contact::{
        ContactForm, ErrorSlot, Field, Notice, Notifier, SubmissionStatus, FAILURE_NOTICE,
        SUCCESS_NOTICE,
    };

    #[derive(Debug, Clone)]
    struct Hit {
        headers: HeaderMap,
        body: Value,
    }

    #[derive(Clone)]
    struct Provider {
        reply: (StatusCode, &'static str),
        hits: Arc<Mutex<Vec<Hit>>>,
    }

    async fn send_email(
        State(provider): State<Provider>,
        headers: HeaderMap,
        body: Bytes,
    ) -> (StatusCode, &'static str) {
        let body = serde_json::from_slice(&body).unwrap_or(Value::Null);
        provider.hits.lock().unwrap().push(Hit { headers, body });
        provider.reply
    }

    /// Starts a fake provider that answers every POST with `reply`.
    async fn spawn_provider(
        status: StatusCode,
        body: &'static str,
    ) -> (String, Arc<Mutex<Vec<Hit>>>) {
        let hits = Arc::new(Mutex::new(Vec::new()));
        let app = Router::new()
            .route("/v3/smtp/email", post(send_email))
            .with_state(Provider {
                reply: (status, body),
                hits: hits.clone(),
            });
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (format!("http://{addr}/v3/smtp/email"), hits)
    }

    #[derive(Clone, Default)]
    struct Notices(Rc<RefCell<Vec<Notice>>>);

    impl Notifier for Notices {
        fn notify(&self, notice: Notice) {
            self.0.borrow_mut().push(notice);
        }
    }

    fn mailer(endpoint: String) -> BrevoMailer {
        BrevoMailer::new(EmailConfig {
            api_key: "test-key".to_string(),
            endpoint,
            sender: Contact {
                name: "Portfolio Form".to_string(),
                email: "form@example.com".to_string(),
            },
            recipient: Contact {
                name: "Site Owner".to_string(),
                email: "owner@example.com".to_string(),
            },
            template_id: 2,
        })
    }

    fn filled_form(notices: &Notices) -> ContactForm<Notices> {
        let mut form = ContactForm::new(notices.clone());
        form.update_field(Field::Name, "Ana Gomez");
        form.update_field(Field::Email, "ana@example.com");
        form.update_field(Field::Message, "Hola, me interesa tu perfil");
        form
    }

    #[tokio::test]
    async fn test_delivery_posts_once_and_resets_form() {
        let (endpoint, hits) = spawn_provider(StatusCode::OK, r#"{"messageId":"<1@smtp>"}"#).await;
        let notices = Notices::default();
        let mut form = filled_form(&notices);

        let status = form.submit(&mailer(endpoint)).await;

        assert_eq!(status, SubmissionStatus::Success);
        assert!(form.data().is_empty());
        assert!(form.errors().is_empty());
        assert_eq!(*notices.0.borrow(), vec![Notice::Success(SUCCESS_NOTICE.to_string())]);

        let hits = hits.lock().unwrap();
        assert_eq!(hits.len(), 1);
        let hit = &hits[0];
        assert_eq!(hit.headers["api-key"], "test-key");
        assert_eq!(hit.headers["accept"], "application/json");
        assert_eq!(hit.headers["content-type"], "application/json");
        assert_eq!(hit.body["templateId"], 2);
        assert_eq!(hit.body["to"][0]["email"], "owner@example.com");
        assert_eq!(hit.body["params"]["name"], "Ana Gomez");
        assert_eq!(hit.body["params"]["phone"], "Not provided");
    }

    #[tokio::test]
    async fn test_provider_failure_keeps_form() {
        let (endpoint, hits) =
            spawn_provider(StatusCode::INTERNAL_SERVER_ERROR, r#"{"message":"bad template"}"#).await;
        let notices = Notices::default();
        let mut form = filled_form(&notices);

        let status = form.submit(&mailer(endpoint)).await;

        assert_eq!(status, SubmissionStatus::Error);
        assert_eq!(form.data().get(Field::Name), "Ana Gomez");
        assert_eq!(form.data().get(Field::Message), "Hola, me interesa tu perfil");
        let general = form.errors().get(ErrorSlot::General).unwrap();
        assert!(general.contains("bad template"), "{general}");
        assert_eq!(*notices.0.borrow(), vec![Notice::Error(FAILURE_NOTICE.to_string())]);
        assert_eq!(hits.lock().unwrap().len(), 1);
    }
}
