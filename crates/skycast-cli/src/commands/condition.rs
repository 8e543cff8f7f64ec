use clap::Subcommand;
use skycast_core::conditions;

#[derive(Subcommand)]
pub enum ConditionAction {
    /// Normalize a numeric provider condition code
    Code {
        /// Provider condition code (e.g. 1183)
        code: i64,
    },
    /// Normalize a free-text condition description
    Text {
        /// Provider condition text (e.g. "Patchy light drizzle")
        text: String,
    },
}

pub fn run(action: ConditionAction) -> Result<(), Box<dyn std::error::Error>> {
    let condition = match action {
        ConditionAction::Code { code } => conditions::normalize(code),
        ConditionAction::Text { text } => conditions::normalize_text(&text),
    };
    println!("{}", condition.as_str());
    Ok(())
}
