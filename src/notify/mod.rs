//! Contact submission notifications.
//!
//! When SMTP is configured, each stored contact is forwarded to the site owner's inbox
//! with Reply-To set to the submitter.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::SmtpConfig;
use crate::errors::AppError;
use crate::models::Contact;

/// Receives every stored contact submission.
#[async_trait]
pub trait ContactNotifier: Send + Sync {
    async fn notify(&self, contact: &Contact) -> Result<(), AppError>;
}

/// Transport seam so message composition can be tested without a server.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, message: Message) -> Result<(), AppError>;
}

#[async_trait]
impl Mailer for AsyncSmtpTransport<Tokio1Executor> {
    async fn send(&self, message: Message) -> Result<(), AppError> {
        AsyncTransport::send(self, message)
            .await
            .map(|_response| ())
            .map_err(|e| AppError::Internal(format!("SMTP send failed: {}", e)))
    }
}

pub struct SmtpNotifier {
    mailer: Box<dyn Mailer>,
    from: Mailbox,
    to: Mailbox,
}

fn mailbox(address: &str) -> Result<Mailbox, AppError> {
    address
        .parse()
        .map_err(|e| AppError::Internal(format!("Invalid mailbox {:?}: {}", address, e)))
}

impl SmtpNotifier {
    pub fn new_with_mailer(
        mailer: Box<dyn Mailer>,
        from: &str,
        to: &str,
    ) -> Result<Self, AppError> {
        Ok(Self {
            mailer,
            from: mailbox(from)?,
            to: mailbox(to)?,
        })
    }

    /// STARTTLS relay authenticated as the configured user, who is also the sender.
    pub fn from_config(config: &SmtpConfig) -> Result<Self, AppError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .map_err(|e| AppError::Internal(format!("SMTP relay setup failed: {}", e)))?
            .port(config.port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        Self::new_with_mailer(Box::new(transport), &config.username, &config.notify_to)
    }

    /// Build the notification for one submission.
    pub fn compose(&self, contact: &Contact) -> Result<Message, AppError> {
        Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .reply_to(mailbox(&contact.email)?)
            .subject(format!("New Contact Form Submission from {}", contact.name))
            .header(ContentType::TEXT_PLAIN)
            .body(notification_body(contact))
            .map_err(|e| AppError::Internal(format!("Failed to build message: {}", e)))
    }
}

#[async_trait]
impl ContactNotifier for SmtpNotifier {
    async fn notify(&self, contact: &Contact) -> Result<(), AppError> {
        let message = self.compose(contact)?;
        self.mailer.send(message).await
    }
}

fn notification_body(contact: &Contact) -> String {
    format!(
        "Name: {}\nEmail: {}\nPhone: {}\nInvestment Goal: {}\n\nMessage:\n{}\n",
        contact.name,
        contact.email,
        contact.phone.as_deref().unwrap_or("Not provided"),
        contact.investment_goal.as_deref().unwrap_or("Not specified"),
        contact.message.as_deref().unwrap_or(""),
    )
}
