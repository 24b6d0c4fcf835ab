//! Outbound mail transport clients.

mod sendgrid;

pub use sendgrid::SendGridMailer;
