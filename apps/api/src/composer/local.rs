use std::sync::Mutex;

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::composer::JokeComposer;
use crate::errors::JokeError;
use crate::templates::HumorTemplate;

/// Offline composer. Fills the template's phrasebook with the quoted seed
/// and closes with one ending picked uniformly at random.
pub struct LocalComposer {
    rng: Mutex<StdRng>,
}

impl LocalComposer {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    #[cfg(test)]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Every joke this composer can produce for `template` and `seed`,
    /// one per ending.
    pub fn candidates(template: &HumorTemplate, seed: &str) -> Vec<String> {
        let setup = render_setup(template, seed);
        template
            .phrasebook
            .endings
            .iter()
            .map(|ending| format!("{setup} {ending}"))
            .collect()
    }
}

impl Default for LocalComposer {
    fn default() -> Self {
        Self::new()
    }
}

fn render_setup(template: &HumorTemplate, seed: &str) -> String {
    let quoted = format!("\"{seed}\"");
    template
        .phrasebook
        .setup
        .iter()
        .map(|line| line.replace("{seed}", &quoted))
        .collect::<Vec<_>>()
        .join(" ")
}

#[async_trait]
impl JokeComposer for LocalComposer {
    fn backend(&self) -> &'static str {
        "local"
    }

    async fn compose(&self, template: &HumorTemplate, seed: &str) -> Result<String, JokeError> {
        let candidates = Self::candidates(template, seed);
        let picked = {
            let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
            candidates.choose(&mut *rng).cloned()
        };
        Ok(picked.unwrap_or_else(|| render_setup(template, seed)))
    }
}
