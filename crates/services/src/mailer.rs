use jazbaa_config::SmtpSettings;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Mailbox, header::ContentType},
    transport::smtp::authentication::Credentials,
};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum MailerError {
    #[error("Invalid address: {0}")]
    Address(#[from] lettre::address::AddressError),
    #[error("Message build error: {0}")]
    Build(#[from] lettre::error::Error),
    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}

/// Outbound transactional email. Every send is best-effort: callers
/// report failures as a warning alongside a manually usable link and
/// never roll back the operation that triggered the mail.
pub struct Mailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    public_base_url: String,
}

impl Mailer {
    pub fn new(smtp: &SmtpSettings, public_base_url: String) -> Result<Self, MailerError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&smtp.host)?
            .port(smtp.port)
            .credentials(Credentials::new(smtp.username.clone(), smtp.password.clone()))
            .build();

        Ok(Self {
            transport,
            from: smtp.from.parse()?,
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn register_url(&self, token: &str) -> String {
        format!("{}/register/{}", self.public_base_url, token)
    }

    pub fn profile_url(&self, slug: &str) -> String {
        format!("{}/startup/{}", self.public_base_url, slug)
    }

    pub async fn send_invite(
        &self,
        to: &str,
        token: &str,
        invite_number: u32,
    ) -> Result<(), MailerError> {
        let link = self.register_url(token);
        let html = format!(
            "<h2>You're invited to JAZBAA</h2>\
             <p>Register your startup profile using your personal link:</p>\
             <p><a href=\"{link}\">{link}</a></p>\
             <p>This link is single-use. Invite #{invite_number} for this address.</p>"
        );
        self.send_html(to, "Your JAZBAA registration invite", html)
            .await
    }

    pub async fn send_welcome(
        &self,
        to: &str,
        startup_name: &str,
        slug: &str,
    ) -> Result<(), MailerError> {
        let link = self.profile_url(slug);
        let html = format!(
            "<h2>Welcome to JAZBAA, {startup_name}!</h2>\
             <p>Your startup profile is live:</p>\
             <p><a href=\"{link}\">{link}</a></p>"
        );
        self.send_html(to, "Your JAZBAA profile is live", html).await
    }

    pub async fn send_contact_ack(
        &self,
        to: &str,
        name: &str,
        contact_type: &str,
    ) -> Result<(), MailerError> {
        let html = format!(
            "<p>Hi {name},</p>\
             <p>We received your {contact_type} message and will get back to you shortly.</p>\
             <p>— The JAZBAA team</p>"
        );
        self.send_html(to, "We received your message", html).await
    }

    async fn send_html(&self, to: &str, subject: &str, html: String) -> Result<(), MailerError> {
        let message = Message::builder()
            .from(self.from.clone())
            .to(to.parse()?)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(html)?;

        self.transport.send(message).await?;
        info!(to, subject, "Email sent");
        Ok(())
    }
}
