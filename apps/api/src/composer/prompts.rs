// Prompt constants and the user-prompt builder for the remote composer.

use crate::templates::HumorTemplate;

/// System instruction sent with every remote generation.
pub const JOKE_SYSTEM: &str =
    "You are a joke writer. Produce one concise joke that matches the requested humor style.";

/// Formatting rules appended after the seed.
pub const JOKE_RULES: &str = "Rules:\n\
    - Return only the joke text.\n\
    - Keep it to 1-3 sentences.\n\
    - Keep the style faithful to the humor type.\n\
    - No explanations, no labels.\n";

/// Renders the few-shot user prompt for `template` and `seed`.
pub fn build_user_prompt(template: &HumorTemplate, seed: &str) -> String {
    let examples = template
        .examples
        .iter()
        .map(|ex| format!("Input: \"{}\"\nJoke: \"{}\"", ex.input, ex.joke))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Humor type: {name}\n\
         Style brief: {focus}\n\n\
         {examples}\n\n\
         Now write one new joke for this input: \"{seed}\"\n\
         {rules}",
        name = template.name,
        focus = template.prompt_focus,
        rules = JOKE_RULES,
    )
}
