//! Outbound notification mail for the contact and appointment forms.
//!
//! Wraps the lettre async SMTP transport. Each form produces a plain-text
//! and an HTML rendering of the same notification, addressed to the clinic
//! inbox configured via `ADMIN_EMAIL_TO`.

use lettre::{
    message::MultiPart, transport::smtp::authentication::Credentials, AsyncSmtpTransport,
    AsyncTransport, Message, Tokio1Executor,
};

use crate::server::{
    config::Config,
    error::mail::MailError,
    model::form::{AppointmentFormDto, ContactFormDto},
};

#[derive(Clone)]
pub struct Mailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: String,
    to: String,
}

impl Mailer {
    pub fn from_config(config: &Config) -> Result<Self, MailError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
            .port(config.smtp_port)
            .credentials(Credentials::new(
                config.smtp_user.clone(),
                config.smtp_pass.clone(),
            ))
            .build();

        Ok(Self {
            transport,
            from: config.smtp_user.clone(),
            to: config.mail_to.clone(),
        })
    }

    pub async fn send_contact(&self, form: &ContactFormDto) -> Result<(), MailError> {
        let message = Message::builder()
            .from(format!("\"{}\" <{}>", form.name, self.from).parse()?)
            .to(self.to.parse()?)
            .subject(format!("Contact form: {}", form.subject))
            .multipart(MultiPart::alternative_plain_html(
                contact_text(form),
                contact_html(form),
            ))?;

        self.transport.send(message).await?;
        tracing::info!(from = %form.email, "Contact notification sent");
        Ok(())
    }

    pub async fn send_appointment(&self, form: &AppointmentFormDto) -> Result<(), MailError> {
        let message = Message::builder()
            .from(format!("\"{}\" <{}>", form.name, self.from).parse()?)
            .to(self.to.parse()?)
            .subject(format!("New appointment request - {}", form.name))
            .multipart(MultiPart::alternative_plain_html(
                appointment_text(form),
                appointment_html(form),
            ))?;

        self.transport.send(message).await?;
        tracing::info!(from = %form.email, "Appointment notification sent");
        Ok(())
    }
}

fn contact_text(form: &ContactFormDto) -> String {
    format!(
        "New contact message\n\n\
         From: {}\n\
         Email: {}\n\
         Subject: {}\n\n\
         Message:\n{}\n\n\
         Sent through the clinic website contact form.\n",
        form.name, form.email, form.subject, form.message
    )
}

fn contact_html(form: &ContactFormDto) -> String {
    format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <h2 style="color: #2563eb;">New contact message</h2>
  <div style="background-color: #f8fafc; padding: 20px; border-radius: 8px; margin: 20px 0;">
    <p><strong>From:</strong> {}</p>
    <p><strong>Email:</strong> {}</p>
    <p><strong>Subject:</strong> {}</p>
  </div>
  <div style="background-color: #ffffff; padding: 20px; border: 1px solid #e2e8f0; border-radius: 8px;">
    <h3 style="margin-top: 0;">Message:</h3>
    <p style="line-height: 1.6;">{}</p>
  </div>
  <p style="font-size: 14px; color: #92400e;">Sent through the clinic website contact form.</p>
</div>"#,
        form.name,
        form.email,
        form.subject,
        form.message.replace('\n', "<br>")
    )
}

fn appointment_text(form: &AppointmentFormDto) -> String {
    let mut body = format!(
        "New appointment request\n\n\
         Patient: {}\n\
         Email: {}\n\
         Phone: {}\n\
         Preferred date: {}\n",
        form.name, form.email, form.phone, form.preferred_date
    );
    if let Some(time) = &form.preferred_time {
        body.push_str(&format!("Preferred time: {time}\n"));
    }
    if let Some(department) = &form.department {
        body.push_str(&format!("Department: {department}\n"));
    }
    if let Some(message) = &form.message {
        body.push_str(&format!("\nAdditional notes:\n{message}\n"));
    }
    body.push_str("\nSent through the clinic website appointment form.\n");
    body
}

fn appointment_html(form: &AppointmentFormDto) -> String {
    let mut details = format!(
        "<p><strong>Patient:</strong> {}</p>\n\
         <p><strong>Email:</strong> {}</p>\n\
         <p><strong>Phone:</strong> {}</p>\n\
         <p><strong>Preferred date:</strong> {}</p>",
        form.name, form.email, form.phone, form.preferred_date
    );
    if let Some(time) = &form.preferred_time {
        details.push_str(&format!("\n<p><strong>Preferred time:</strong> {time}</p>"));
    }
    if let Some(department) = &form.department {
        details.push_str(&format!("\n<p><strong>Department:</strong> {department}</p>"));
    }

    let notes = form
        .message
        .as_ref()
        .map(|message| {
            format!(
                r#"
  <div style="background-color: #ffffff; padding: 20px; border: 1px solid #e2e8f0; border-radius: 8px;">
    <h3 style="margin-top: 0;">Additional notes:</h3>
    <p style="line-height: 1.6;">{}</p>
  </div>"#,
                message.replace('\n', "<br>")
            )
        })
        .unwrap_or_default();

    format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <h2 style="color: #dc2626;">New appointment request</h2>
  <div style="background-color: #fef2f2; padding: 20px; border-radius: 8px; margin: 20px 0; border-left: 4px solid #dc2626;">
    {details}
  </div>{notes}
  <p style="font-size: 14px; color: #92400e;">Sent through the clinic website appointment form.</p>
</div>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact_form() -> ContactFormDto {
        ContactFormDto {
            name: "Ahmet Yilmaz".to_string(),
            email: "ahmet@example.com".to_string(),
            subject: "Appointment question".to_string(),
            message: "Hello,\nI would like to ask about recovery times.".to_string(),
        }
    }

    fn appointment_form() -> AppointmentFormDto {
        AppointmentFormDto {
            name: "Ayse Demir".to_string(),
            email: "ayse@example.com".to_string(),
            phone: "+90 555 123 4567".to_string(),
            preferred_date: "2026-09-15".to_string(),
            preferred_time: Some("14:00".to_string()),
            department: None,
            message: Some("After my MRI results.".to_string()),
        }
    }

    #[test]
    fn contact_bodies_carry_all_fields() {
        let form = contact_form();
        let text = contact_text(&form);
        assert!(text.contains("Ahmet Yilmaz"));
        assert!(text.contains("ahmet@example.com"));
        assert!(text.contains("Appointment question"));
        assert!(text.contains("recovery times"));

        let html = contact_html(&form);
        assert!(html.contains("Ahmet Yilmaz"));
        // Newlines in the message become line breaks.
        assert!(html.contains("Hello,<br>I would like"));
    }

    #[test]
    fn appointment_bodies_carry_optional_fields_only_when_present() {
        let form = appointment_form();
        let text = appointment_text(&form);
        assert!(text.contains("Preferred time: 14:00"));
        assert!(!text.contains("Department:"));
        assert!(text.contains("After my MRI results."));

        let html = appointment_html(&form);
        assert!(html.contains("Preferred time:"));
        assert!(!html.contains("Department:"));

        let bare = AppointmentFormDto {
            preferred_time: None,
            message: None,
            ..form
        };
        let text = appointment_text(&bare);
        assert!(!text.contains("Preferred time:"));
        assert!(!text.contains("Additional notes:"));
    }
}
