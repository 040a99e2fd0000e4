//! Scripted walkthrough of the contact-form workflow.
//!
//! Runs the library against the in-memory page and the simulated
//! transport: a submit with errors, a fix-up, a successful submit, and a
//! failed delivery, printing banners as a terminal "page" would render
//! them.

use std::fs::File;
use std::sync::Arc;
use std::time::Duration;

use formline::prelude::*;
use simplelog::{Config, LevelFilter, WriteLogger};

/// Prints banners to stdout in place of a rendered alert container.
struct ConsoleHost;

impl NotificationHost for ConsoleHost {
    fn show(&self, notification: &Notification) {
        println!(
            "  [{} {}] {}",
            notification.severity.icon(),
            notification.severity,
            notification.message
        );
    }

    fn retire(&self, _id: NotificationId) {
        println!("  (banner dismissed)");
    }

    fn focus(&self, _id: NotificationId) {}
}

fn print_errors(page: &MemoryPage) {
    for field in Field::ALL {
        if let Some(message) = page.field_error(field) {
            println!("  {field}: {message}");
        }
    }
}

#[tokio::main]
async fn main() {
    let log_file = File::create("formline-cli.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    log::info!("starting scripted contact-form session");

    let page = MemoryPage::new();
    let notifier = Notifier::new(Arc::new(ConsoleHost));
    let transport = SimulatedTransport::new().with_latency(Duration::from_millis(300));
    let controller = FormController::new(
        Arc::new(page.clone()),
        Arc::new(transport),
        notifier.clone(),
    );

    println!("== Submit with an invalid email and unchecked privacy box ==");
    page.set_field_value(Field::Name, "Ada Lovelace".into());
    page.set_field_value(Field::Email, "not-an-email".into());
    page.set_field_value(Field::Message, "I would like a brochure, please.".into());
    let outcome = controller.submit().await;
    println!("  outcome: {outcome:?}");
    print_errors(&page);
    println!("  focus is on: {:?}", page.focused());

    println!("\n== Fix the fields and submit again ==");
    page.set_field_value(Field::Email, "ada@example.com".into());
    controller.validate_field(Field::Email);
    page.set_field_value(Field::Privacy, true.into());
    controller.validate_field(Field::Privacy);
    let outcome = controller.submit().await;
    println!("  outcome: {outcome:?}");
    println!(
        "  form cleared: name is now {:?}",
        page.field_value(Field::Name)
    );

    println!("\n== Delivery failure keeps the form intact ==");
    let flaky = SimulatedTransport::new()
        .with_latency(Duration::from_millis(300))
        .failing(SendError::Unavailable("upstream maintenance".into()));
    let controller = FormController::new(Arc::new(page.clone()), Arc::new(flaky), notifier);
    page.set_field_value(Field::Name, "Ada Lovelace".into());
    page.set_field_value(Field::Email, "ada@example.com".into());
    page.set_field_value(Field::Message, "Second attempt, same message.".into());
    page.set_field_value(Field::Privacy, true.into());
    let outcome = controller.submit().await;
    println!("  outcome: {outcome:?}");
    println!(
        "  values preserved: email is still {:?}",
        page.field_value(Field::Email)
    );

    println!("\n== Product categories ==");
    let mut filter = CategoryFilter::new(["engines", "looms", "punch-cards"]);
    println!("  default active: {:?}", filter.active());
    filter.activate("looms");
    println!("  after click:    {:?}", filter.active());
}
