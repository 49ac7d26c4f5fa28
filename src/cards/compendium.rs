//! The built-in ML team skill card compendium.
//!
//! Fourteen cards across four pillars plus the cross-cutting layer. Each
//! card maps to one agent skill used by the team.

use super::attributes::{Attribute, CardKind, Pillar, Rarity};
use super::catalog::Catalog;
use super::definition::{Card, CardId};

/// Build the compendium catalog.
#[must_use]
pub fn compendium() -> Catalog {
    Catalog::new(compendium_cards()).expect("compendium card ids are unique")
}

/// The compendium cards in display order.
#[must_use]
pub fn compendium_cards() -> Vec<Card> {
    vec![
        Card::new(CardId::new(1), "The Stakeholder Whisperer", Pillar::Deliver)
            .with_skill("non-technical-explainability")
            .with_kind(CardKind::Spell)
            .with_attribute(Attribute::Light)
            .with_stats(800, 2800, 3)
            .with_rarity(Rarity::Rare)
            .with_art("🧿")
            .with_flavor_text("Transforms cryptic model outputs into business clarity. Non-technical stakeholders gain +2800 trust points.")
            .with_effect("When this card is activated, translate any ML result into: Bottom Line → What We Did → Confidence & Caveats → Next Action. Cannot be countered by technical jargon.")
            .with_tags(["stakeholder", "communication", "explainability"]),
        Card::new(CardId::new(2), "Technical Oracle", Pillar::Deliver)
            .with_skill("technical-explainability")
            .with_kind(CardKind::EffectMonster)
            .with_attribute(Attribute::Dark)
            .with_stats(2100, 1600, 6)
            .with_rarity(Rarity::SuperRare)
            .with_art("🔬")
            .with_flavor_text("Sees through the model's layers. Wields SHAP values like a blade and reads attention maps like ancient scrolls.")
            .with_effect("Choose 1 mode: Architecture / Training Dynamics / Prediction Attribution / Error Analysis / Experiment Comparison. Apply that mode's template. Gain statistical significance before reporting results.")
            .with_tags(["debugging", "attribution", "SHAP", "error analysis"]),
        Card::new(CardId::new(3), "Stakeholder Herald", Pillar::Deliver)
            .with_skill("stakeholder-communication")
            .with_kind(CardKind::Spell)
            .with_attribute(Attribute::Light)
            .with_stats(600, 2400, 2)
            .with_rarity(Rarity::Common)
            .with_art("📣")
            .with_flavor_text("Master of business narrative. Turns model updates into executive-ready announcements that inspire confidence, not confusion.")
            .with_effect("Write forecast delivery emails, model announcements, and limitation disclosures. All communications include Confidence Level (High/Medium/Low) and One Clear Next Action. Permanently silences the question 'what does this mean for us?'")
            .with_tags(["email", "announcement", "confidence language"]),
        Card::new(CardId::new(4), "Architecture Archfiend", Pillar::Build)
            .with_skill("timeseries-dl-architecture")
            .with_kind(CardKind::FusionMonster)
            .with_attribute(Attribute::Dark)
            .with_stats(3200, 2400, 9)
            .with_rarity(Rarity::SecretRare)
            .with_art("🧬")
            .with_flavor_text("Born from the fusion of TFT, N-HiTS, and PatchTST knowledge. Speaks fluent inductive bias. Writes ADRs in its sleep.")
            .with_effect("Step 1: Run Problem Characterization Checklist. Step 2: Consult Architecture Selection Matrix. Step 3: Generate Architecture Decision Record. This card cannot be Normal Summoned — must be Special Summoned by completing a baseline hierarchy (Naive → Statistical → ML → Simple DL).")
            .with_tags(["TFT", "N-BEATS", "PatchTST", "Chronos", "architecture decision"]),
        Card::new(CardId::new(5), "Sensei of Sequences", Pillar::Build)
            .with_skill("timeseries-dl-teacher")
            .with_kind(CardKind::EffectMonster)
            .with_attribute(Attribute::Light)
            .with_stats(1200, 2000, 4)
            .with_rarity(Rarity::Rare)
            .with_art("📖")
            .with_flavor_text("Speaks to beginners in analogies, to experts in equations. Has never let a student leave confused — not even about positional encoding.")
            .with_effect("Assess student level (Beginner/Intermediate/Advanced/Expert). Apply Concept Teaching Template: One-line intuition → Why it matters → How it works (calibrated) → Code sketch → Misconceptions → What to learn next. Can teach any concept from stationarity to foundation models.")
            .with_tags(["teaching", "curriculum", "analogies", "learning path"]),
        Card::new(CardId::new(6), "Gradient Descent God", Pillar::Build)
            .with_skill("timeseries-dl-training")
            .with_kind(CardKind::RitualMonster)
            .with_attribute(Attribute::Fire)
            .with_stats(3000, 1800, 8)
            .with_rarity(Rarity::UltraRare)
            .with_art("⚡")
            .with_flavor_text("Summoned only after the Pre-Training Checklist ritual is complete. Commands loss curves to converge. Destroys NaN gradients on sight.")
            .with_effect("ALWAYS activate Pre-Training Checklist before summoning. Select correct Loss Function from matrix (MAE/MSE/CRPS/Tweedie). On training failure, activate Debugging Decision Tree. When opponent plays 'Overfitting', counter with dropout + weight decay. Uses Optuna for hyperparameter ritualism.")
            .with_tags(["optimizer", "loss function", "debugging", "Optuna", "mixed precision"]),
        Card::new(CardId::new(7), "Cloud Warlord SageMaker", Pillar::Operate)
            .with_skill("sagemaker-expert")
            .with_kind(CardKind::XyzMonster)
            .with_attribute(Attribute::Wind)
            .with_stats(2800, 2200, 7)
            .with_rarity(Rarity::UltraRare)
            .with_art("☁️")
            .with_flavor_text("Ruler of all training jobs. Hoards spot instances. Demands all resources be tagged with project, team, and environment.")
            .with_effect("Attach 1 Spot Instance token (save 60-90% cost). Equip SageMaker Experiments to log all metrics. When model passes evaluation, send to Model Registry (PendingManualApproval). Special ability: Deploy as Batch Transform — destroy persistent endpoints to cut cost.")
            .with_tags(["AWS", "spot instances", "model registry", "pipelines", "batch transform"]),
        Card::new(CardId::new(8), "Resource Miser", Pillar::Operate)
            .with_skill("limited-resources-expert")
            .with_kind(CardKind::EffectMonster)
            .with_attribute(Attribute::Earth)
            .with_stats(1600, 2600, 5)
            .with_rarity(Rarity::SuperRare)
            .with_art("⚙️")
            .with_flavor_text("Does more with less. Has trained a model on a CPU with 4GB RAM and still beat the baseline. Mixed precision flows through its veins.")
            .with_effect("Identify binding constraint (GPU Memory / Training Time / Latency / Data / Cost / CPU-only). Activate matching optimization: OOM → Mixed Precision + Gradient Accumulation. Low data → Chronos zero-shot + augmentation. Latency → INT8 Quantization + ONNX. Always uses DLinear as sanity check.")
            .with_tags(["OOM", "quantization", "ONNX", "mixed precision", "low data", "CPU"]),
        Card::new(CardId::new(9), "API Architect Prime", Pillar::Operate)
            .with_skill("api-design-expert")
            .with_kind(CardKind::Spell)
            .with_attribute(Attribute::Wind)
            .with_stats(1800, 1800, 5)
            .with_rarity(Rarity::Rare)
            .with_art("🔌")
            .with_flavor_text("Summoner of clean contracts. Every endpoint has an example. Every error code has a human-readable message. Versioning from Day 1, always.")
            .with_effect("Generate Forecast API schema (request + response with quantiles). Structure: POST /v1/forecasts, GET /models/{version}, POST /v1/explain. All error responses include code, message, detail, docs_url. Must include Deprecation policy (60-day notice, 90-day sunset).")
            .with_tags(["REST", "FastAPI", "Pydantic", "versioning", "error codes"]),
        Card::new(CardId::new(10), "DX Deity", Pillar::Operate)
            .with_skill("ux-developer")
            .with_kind(CardKind::EffectMonster)
            .with_attribute(Attribute::Light)
            .with_stats(1400, 2200, 4)
            .with_rarity(Rarity::SuperRare)
            .with_art("✨")
            .with_flavor_text("Patron god of developer experience. Writes error messages that actually help. Configuration cells. Progressive complexity. The Pit of Success is its home.")
            .with_effect("Apply Pit of Success principle: right thing easy, wrong thing hard. SDK must support 3 levels (default → config → full control). CLI must include --dry-run, --verbose, --help. Every error message includes: what went wrong + how to fix it + docs link. New tool must be usable on Day 1 without asking for help.")
            .with_tags(["SDK", "CLI", "notebooks", "error messages", "onboarding"]),
        Card::new(CardId::new(11), "The Eternal Seed", Pillar::Govern)
            .with_skill("reproducibility-standards")
            .with_kind(CardKind::ContinuousSpell)
            .with_attribute(Attribute::Earth)
            .with_stats(0, 3500, 4)
            .with_rarity(Rarity::SuperRare)
            .with_art("🔒")
            .with_flavor_text("set_all_seeds(42). The one invocation that must always come first. Keeper of checksums. Author of model cards. Enemy of undocumented runs.")
            .with_effect("Permanent field effect: ALL experiments must include seed, git commit, requirements-lock.txt, and data checksum. Generate Model Card on every deployment. DVC tracks all data versions. This card cannot be destroyed while a training job is active.")
            .with_tags(["DVC", "seeds", "model cards", "git", "environment pinning"]),
        Card::new(CardId::new(12), "Data Guardian Beast", Pillar::Govern)
            .with_skill("data-quality-guardian")
            .with_kind(CardKind::EffectMonster)
            .with_attribute(Attribute::Earth)
            .with_stats(2200, 2800, 6)
            .with_rarity(Rarity::UltraRare)
            .with_art("🛡️")
            .with_flavor_text("Stands at the gates of the training pipeline. Nothing passes without a checksum. Detects stockouts, leakage, and structural breaks with preternatural accuracy.")
            .with_effect("Run full audit: Completeness → Temporal Integrity → Value Integrity → Distribution → Series-Level. On detection: Missing Values → forward-fill protocol. Outliers → IQR containment. Structural Break → regime split. Leakage → immediately halt training and report. Produce signed Data Quality Report before any model trains.")
            .with_tags(["missing values", "outliers", "leakage", "structural breaks", "drift"]),
        Card::new(CardId::new(13), "Validation Loop Sentinel", Pillar::CrossCutting)
            .with_skill("validation-feedback-loop")
            .with_kind(CardKind::Trap)
            .with_attribute(Attribute::Dark)
            .with_stats(1900, 2500, 5)
            .with_rarity(Rarity::UltraRare)
            .with_art("🔄")
            .with_flavor_text("Always watching. When a model underperforms in production, this card activates automatically. MASE > 1.5× threshold triggers the alarm.")
            .with_effect("TRAP — Activate when model is deployed: initiate production monitoring loop. Collect actuals at T+horizon. If MASE > 1.5× validation MASE OR Coverage < threshold-10% OR Bias > ±15%, force Root Cause Analysis. Counter target: 'Expanding Window Backtest' before any production claim. Minimum 5 folds. Mean ± std across 3 seeds.")
            .with_tags(["MASE", "CRPS", "backtesting", "monitoring", "coverage"]),
        Card::new(CardId::new(14), "Experiment Alchemist", Pillar::CrossCutting)
            .with_skill("experiment-facilitator")
            .with_kind(CardKind::ContinuousTrap)
            .with_attribute(Attribute::Fire)
            .with_stats(2000, 2000, 6)
            .with_rarity(Rarity::SecretRare)
            .with_art("🧪")
            .with_flavor_text("No undirected exploration on its watch. Every run has a falsifiable hypothesis. Cherry-picking, HiPPO opinions, and unnamed MLflow runs are instantly destroyed.")
            .with_effect("PERMANENT FIELD EFFECT: No experiment may begin without a complete Hypothesis Template. Destroy any experiment lacking: Hypothesis / Baseline / Success Criteria / Compute Budget / Expected Outcome. Anti-pattern detector: automatically flags Cherry-Picking, HiPPO, Metric Shopping, and Undocumented Runs. Prioritize by: Impact × Confidence × Cost_inverse.")
            .with_tags(["hypothesis", "A/B testing", "ablation", "MLflow", "prioritization"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compendium_size() {
        let catalog = compendium();
        assert_eq!(catalog.len(), 14);
    }

    #[test]
    fn test_compendium_ids_are_sequential() {
        let catalog = compendium();
        let ids: Vec<_> = catalog.ids().map(CardId::raw).collect();
        assert_eq!(ids, (1..=14).collect::<Vec<_>>());
    }

    #[test]
    fn test_compendium_covers_every_pillar() {
        let catalog = compendium();
        for pillar in Pillar::ALL {
            assert!(
                catalog.iter().any(|c| c.pillar == pillar),
                "no card for {pillar}"
            );
        }
    }

    #[test]
    fn test_compendium_skills_are_unique() {
        let cards = compendium_cards();
        let mut skills: Vec<_> = cards.iter().map(|c| c.skill.as_str()).collect();
        skills.sort_unstable();
        skills.dedup();
        assert_eq!(skills.len(), cards.len());
    }

    #[test]
    fn test_compendium_known_card() {
        let catalog = compendium();
        let seed = catalog.get(CardId::new(11)).unwrap();
        assert_eq!(seed.name, "The Eternal Seed");
        assert_eq!(seed.kind, CardKind::ContinuousSpell);
        assert_eq!(seed.stats.def, 3500);
        assert!(seed.has_tag("DVC"));
    }
}
