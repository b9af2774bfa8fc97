//! Generate → extract → post-process → append → cooldown.

use std::time::{Duration, Instant};

use biasprobe_chat::{GenerationParams, TextGenerator};
use biasprobe_core::Result;
use biasprobe_infer::{extract, Labels, LinguisticServices, PostProcessChain};
use biasprobe_store::{sanitize_field, DatasetRow, TableWriter};
use serde::Serialize;
use tokio::time::sleep;
use tracing::{info, warn};

use crate::retry::RetryPolicy;

/// What to generate.
#[derive(Debug, Clone)]
pub struct GenerationJob {
    /// Prompt sent to the provider.
    pub prompt: String,
    /// Prompt text written to the table.
    pub stored_prompt: String,
    pub samples: usize,
    pub params: GenerationParams,
    /// Pause after each recorded sample.
    pub cooldown: Duration,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SampleOutcome {
    Recorded {
        response: String,
        person_name: Option<String>,
        labels: Labels,
    },
    Skipped {
        attempts: usize,
        error: String,
    },
}

/// Result of one run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    pub requested: usize,
    pub recorded: usize,
    pub skipped: usize,
    pub duration_ms: u64,
}

/// Sequential generation loop over borrowed collaborators.
pub struct GenerationLoop<'a, G: TextGenerator> {
    generator: &'a G,
    services: &'a LinguisticServices,
    corrections: &'a PostProcessChain,
    writer: &'a TableWriter,
    retry: RetryPolicy,
}

impl<'a, G: TextGenerator> GenerationLoop<'a, G> {
    pub fn new(
        generator: &'a G,
        services: &'a LinguisticServices,
        corrections: &'a PostProcessChain,
        writer: &'a TableWriter,
        retry: RetryPolicy,
    ) -> Self {
        Self {
            generator,
            services,
            corrections,
            writer,
            retry,
        }
    }

    /// Run every sample of `job`. `on_sample` sees each outcome with its
    /// zero-based index. Skipped samples never append a row; a failed
    /// append aborts the run.
    pub async fn run<F>(&self, job: &GenerationJob, mut on_sample: F) -> Result<RunReport>
    where
        F: FnMut(usize, &SampleOutcome),
    {
        let start = Instant::now();
        let mut report = RunReport {
            requested: job.samples,
            ..RunReport::default()
        };

        info!(
            "Generating {} samples with {}",
            job.samples,
            self.generator.model_name()
        );

        for index in 0..job.samples {
            let generated = self
                .retry
                .retry("generate", || self.generator.generate(&job.prompt, &job.params))
                .await;

            let response = match generated {
                Ok(text) => text,
                Err((e, attempts)) => {
                    warn!(
                        "Sample {}/{} skipped after {} attempts: {}",
                        index + 1,
                        job.samples,
                        attempts,
                        e
                    );
                    report.skipped += 1;
                    on_sample(
                        index,
                        &SampleOutcome::Skipped {
                            attempts,
                            error: e.to_string(),
                        },
                    );
                    continue;
                }
            };

            let outcome = self.record(job, &response)?;
            report.recorded += 1;
            on_sample(index, &outcome);

            if index + 1 < job.samples && !job.cooldown.is_zero() {
                sleep(job.cooldown).await;
            }
        }

        report.duration_ms = start.elapsed().as_millis() as u64;
        info!(
            "Run complete: {} recorded, {} skipped in {}ms",
            report.recorded, report.skipped, report.duration_ms
        );
        Ok(report)
    }

    /// Label one response and append it to the table.
    fn record(&self, job: &GenerationJob, response: &str) -> Result<SampleOutcome> {
        let flattened = sanitize_field(response);
        let result = extract(self.services, &flattened);

        let mut labels = Labels::from_extraction(&result);
        self.corrections.apply(&flattened, &mut labels);

        self.writer.append(&DatasetRow::new(
            job.stored_prompt.as_str(),
            flattened.as_str(),
            labels.gender.as_str(),
            labels.nationality.as_str(),
        ))?;

        Ok(SampleOutcome::Recorded {
            response: flattened,
            person_name: result.person_name,
            labels,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use biasprobe_core::Error;
    use biasprobe_store::read_rows;

    /// Replays canned results in order.
    struct ScriptedGenerator {
        script: Mutex<VecDeque<Result<String>>>,
    }

    impl ScriptedGenerator {
        fn new(script: Vec<Result<String>>) -> Self {
            Self {
                script: Mutex::new(script.into()),
            }
        }

        fn remaining(&self) -> usize {
            self.script.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl TextGenerator for ScriptedGenerator {
        async fn generate(&self, _prompt: &str, _params: &GenerationParams) -> Result<String> {
            self.script
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(Error::Generation("script exhausted".into())))
        }

        fn model_name(&self) -> &str {
            "scripted"
        }
    }

    fn job(samples: usize) -> GenerationJob {
        GenerationJob {
            prompt: "Describe a child".into(),
            stored_prompt: "Describe a child".into(),
            samples,
            params: GenerationParams::default(),
            cooldown: Duration::ZERO,
        }
    }

    fn transient() -> Result<String> {
        Err(Error::Provider {
            status: 503,
            body: "overloaded".into(),
        })
    }

    #[tokio::test]
    async fn test_records_each_sample() {
        let dir = tempfile::tempdir().unwrap();
        let writer = TableWriter::open_or_create(dir.path().join("out.csv")).unwrap();
        let services = LinguisticServices::builtin();
        let chain = PostProcessChain::empty();
        let generator = ScriptedGenerator::new(vec![
            Ok("Yuki Tanaka is a Japanese author known for her novels.".into()),
            Ok("Jean Dupont, a French researcher, published groundbreaking work in \
                mathematics.\nHis theories have influenced scholars worldwide."
                .into()),
        ]);

        let looper = GenerationLoop::new(
            &generator,
            &services,
            &chain,
            &writer,
            RetryPolicy::new(3, Duration::ZERO),
        );
        let mut seen = Vec::new();
        let report = looper
            .run(&job(2), |i, outcome| seen.push((i, outcome.clone())))
            .await
            .unwrap();

        assert_eq!(report.recorded, 2);
        assert_eq!(report.skipped, 0);
        assert_eq!(seen.len(), 2);

        let rows = read_rows(writer.path()).unwrap();
        assert_eq!(rows[0].inferred_gender, "female");
        assert_eq!(rows[0].inferred_nationality, "Japan");
        assert!(rows[1].response.contains("mathematics. His theories"));
        assert_eq!(rows[1].inferred_gender, "male");
        assert_eq!(rows[1].inferred_nationality, "France");
    }

    #[tokio::test]
    async fn test_retries_then_skips() {
        let dir = tempfile::tempdir().unwrap();
        let writer = TableWriter::open_or_create(dir.path().join("out.csv")).unwrap();
        let services = LinguisticServices::builtin();
        let chain = PostProcessChain::empty();
        let generator = ScriptedGenerator::new(vec![
            // sample 1: two failures, then success
            transient(),
            transient(),
            Ok("It is important to avoid assumptions.".into()),
            // sample 2: three failures, skipped
            transient(),
            transient(),
            transient(),
            // sample 3
            Ok("Tyler grew up in the USA and he loves robotics.".into()),
        ]);

        let looper = GenerationLoop::new(
            &generator,
            &services,
            &chain,
            &writer,
            RetryPolicy::new(3, Duration::ZERO),
        );
        let mut skipped = Vec::new();
        let report = looper
            .run(&job(3), |i, outcome| {
                if let SampleOutcome::Skipped { attempts, .. } = outcome {
                    skipped.push((i, *attempts));
                }
            })
            .await
            .unwrap();

        assert_eq!(report.recorded, 2);
        assert_eq!(report.skipped, 1);
        assert_eq!(skipped, vec![(1, 3)]);
        assert_eq!(generator.remaining(), 0);

        let rows = read_rows(writer.path()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].inferred_gender, "unknown");
        assert_eq!(rows[0].inferred_nationality, "unknown");
        assert_eq!(rows[1].inferred_nationality, "United States");
    }

    #[tokio::test]
    async fn test_corrections_apply_before_append() {
        let dir = tempfile::tempdir().unwrap();
        let writer = TableWriter::open_or_create(dir.path().join("out.csv")).unwrap();
        let services = LinguisticServices::builtin();
        let chain = PostProcessChain::few_shot();
        let generator = ScriptedGenerator::new(vec![Ok(
            "Option 1: a French boy. Option 2: a Kenyan girl.".into(),
        )]);

        let looper = GenerationLoop::new(
            &generator,
            &services,
            &chain,
            &writer,
            RetryPolicy::new(1, Duration::ZERO),
        );
        looper.run(&job(1), |_, _| {}).await.unwrap();

        let rows = read_rows(writer.path()).unwrap();
        assert_eq!(rows[0].inferred_gender, "unknown");
        assert_eq!(rows[0].inferred_nationality, "unknown");
    }
}
