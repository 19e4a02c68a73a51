use clap::Parser;
use keiro::error::FormConversionError;
use keiro::form::{
    FieldDefinition, FieldKind, FormDefinition, FormPages, IntoForm, PageDefinition, PageKind,
    PageNumber, PageRegistry,
};
use keiro::host::{AlwaysValid, MapValueProvider, Tracker};
use keiro::navigator::{AdvanceOutcome, NavigationController};
use keiro::value::FieldValue;
use serde::Deserialize;
use std::fs;

// --- JSON Deserialization Structs (Input Format Specific) ---
// These structs match the `form.json` format and are only used here for
// conversion.

#[derive(Deserialize)]
struct RawForm {
    pages: Vec<RawPage>,
}

#[derive(Deserialize)]
struct RawPage {
    name: String,
    #[serde(default, alias = "thankYou")]
    thank_you: bool,
    #[serde(default)]
    fields: Vec<RawField>,
}

#[derive(Deserialize)]
struct RawField {
    name: String,
    widget: String,
    #[serde(default, alias = "conditionalLogic")]
    conditional_logic: Option<serde_json::Value>,
}

// --- Converter Implementation ---
// This implements the conversion from the raw JSON model to Keiro's
// canonical FormDefinition.

impl IntoForm for RawForm {
    fn into_form(self) -> Result<FormDefinition, FormConversionError> {
        let pages = self
            .pages
            .into_iter()
            .map(|raw_page| {
                let fields = raw_page
                    .fields
                    .into_iter()
                    .map(|raw_field| {
                        let kind = match raw_field.widget.as_str() {
                            "select" => Ok(FieldKind::Select),
                            "radio" => Ok(FieldKind::Radio),
                            "checkbox" => Ok(FieldKind::Checkbox),
                            "range" => Ok(FieldKind::Range),
                            other => Err(FormConversionError::ValidationError(format!(
                                "Field '{}' has an unknown widget kind: '{}'",
                                raw_field.name, other
                            ))),
                        }?;
                        Ok(FieldDefinition {
                            id: raw_field.name,
                            kind,
                            logic: raw_field.conditional_logic,
                        })
                    })
                    .collect::<Result<Vec<_>, FormConversionError>>()?;

                Ok(PageDefinition {
                    id: raw_page.name,
                    kind: if raw_page.thank_you {
                        PageKind::ThankYou
                    } else {
                        PageKind::Standard
                    },
                    fields,
                })
            })
            .collect::<Result<Vec<_>, FormConversionError>>()?;

        Ok(FormDefinition { pages })
    }
}

/// A tracker that narrates navigation events to stdout.
struct PrintTracker;

impl Tracker for PrintTracker {
    fn page_change(&mut self, page: PageNumber) {
        println!("  -> page_change({})", page);
    }

    fn branch_jump(
        &mut self,
        from: PageNumber,
        to: PageNumber,
        field_id: &str,
        matched_value: Option<&FieldValue>,
    ) {
        match matched_value {
            Some(value) => println!(
                "  -> branch_jump({} -> {}) via field '{}' matching '{}'",
                from, to, field_id, value
            ),
            None => println!(
                "  -> branch_jump({} -> {}) via field '{}' default action",
                from, to, field_id
            ),
        }
    }
}

/// A navigation simulator for multi-page survey forms with branching rules
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the form definition JSON file
    form_path: String,
    /// Optional path to a JSON object of field responses, keyed by field name
    responses_path: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let form_json = fs::read_to_string(&cli.form_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read form file '{}': {}",
            &cli.form_path, e
        ))
    });
    let raw_form: RawForm = serde_json::from_str(&form_json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse form JSON: {}", e)));
    let definition = raw_form
        .into_form()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to convert form: {}", e)));

    let mut answers = MapValueProvider::new();
    if let Some(responses_path) = &cli.responses_path {
        let responses_json = fs::read_to_string(responses_path).unwrap_or_else(|e| {
            exit_with_error(&format!(
                "Failed to read responses file '{}': {}",
                responses_path, e
            ))
        });
        let responses: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(&responses_json).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to parse responses JSON: {}", e))
            });
        for (field_id, value) in responses {
            answers.set(field_id, value);
        }
    } else {
        println!("No responses file provided. All fields read as unanswered.");
    }

    let pages = FormPages::from_definition(definition)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to build form pages: {}", e)));
    let total = pages.total_pages();
    println!("Loaded form with {} pages.\n", total);

    let mut navigation = NavigationController::new(pages);
    let mut tracker = PrintTracker;

    // Static responses cannot change mid-run, so a cycle would repeat
    // forever; cap the walk at one advance per page plus slack.
    let max_steps = total as usize + 8;
    println!("Simulating navigation from page 1:");
    for _ in 0..max_steps {
        let from = navigation.current_page();
        match navigation.advance(&answers, &AlwaysValid, &mut tracker) {
            AdvanceOutcome::Submitted => {
                println!("Page {}: submit decision reached.", from);
                break;
            }
            AdvanceOutcome::Moved(to) => {
                println!("Page {}: moved to page {}.", from, to);
            }
            AdvanceOutcome::Blocked { first_invalid } => {
                println!(
                    "Page {}: blocked by invalid field '{}'.",
                    from, first_invalid
                );
                break;
            }
        }
    }

    println!("\n--- Run Summary ---");
    println!("Visited pages: {:?}", navigation.active_path());
    println!("Skipped pages: {:?}", navigation.skipped_pages());
    println!("History stack: {:?}", navigation.history());
    println!("Submitted:     {}", navigation.is_submitted());
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
