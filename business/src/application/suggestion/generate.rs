use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::subscription::repository::SubscriptionRepository;
use crate::domain::suggestion::errors::SuggestionError;
use crate::domain::suggestion::model::{Suggestion, SuggestionProfile};
use crate::domain::suggestion::repository::SuggestionRepository;
use crate::domain::suggestion::services::SuggestionGeneratorService;
use crate::domain::suggestion::use_cases::generate::{
    GenerateSuggestionsParams, GenerateSuggestionsUseCase,
};

pub struct GenerateSuggestionsUseCaseImpl {
    pub subscription_repository: Arc<dyn SubscriptionRepository>,
    pub suggestion_repository: Arc<dyn SuggestionRepository>,
    pub generator: Arc<dyn SuggestionGeneratorService>,
    pub logger: Arc<dyn Logger>,
    /// Deployment flag: when false, suggestions are returned without
    /// being written to the store.
    pub persist: bool,
}

/// Merges request-supplied subscription names with stored rows,
/// preserving order and dropping duplicates case-insensitively.
fn merge_subscription_names(from_request: &[String], from_store: Vec<String>) -> Vec<String> {
    let mut merged: Vec<String> = Vec::new();
    for name in from_request.iter().cloned().chain(from_store) {
        let name = name.trim().to_string();
        if name.is_empty() {
            continue;
        }
        if !merged.iter().any(|m| m.eq_ignore_ascii_case(&name)) {
            merged.push(name);
        }
    }
    merged
}

#[async_trait]
impl GenerateSuggestionsUseCase for GenerateSuggestionsUseCaseImpl {
    async fn execute(
        &self,
        params: GenerateSuggestionsParams,
    ) -> Result<Vec<Suggestion>, SuggestionError> {
        let profile = SuggestionProfile::new(
            params.user_id,
            params.subscriptions,
            params.interests,
            params.budget,
            params.country,
        )?;

        // A misconfigured generator must fail before any outbound call,
        // including the subscription lookup below.
        self.generator.check_configuration()?;

        self.logger.info(&format!(
            "Generating suggestions for user {}",
            profile.user_id
        ));

        let stored = self
            .subscription_repository
            .get_names(&profile.user_id)
            .await?;

        let current = merge_subscription_names(&profile.current_subscriptions, stored);

        let suggestions = self.generator.generate(&profile, &current).await?;

        if self.persist {
            // Independent row inserts: a failure aborts the batch but rows
            // already written stay in place.
            for suggestion in &suggestions {
                self.suggestion_repository
                    .save(suggestion, &profile.user_id)
                    .await
                    .map_err(|e| SuggestionError::PersistenceFailed(e.to_string()))?;
            }
        }

        self.logger
            .info(&format!("Generated {} suggestions", suggestions.len()));

        Ok(suggestions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::UserId;
    use crate::domain::suggestion::model::BillingCycle;
    use mockall::mock;
    use mockall::predicate::always;

    mock! {
        pub SubscriptionRepo {}

        #[async_trait]
        impl SubscriptionRepository for SubscriptionRepo {
            async fn get_names(&self, user_id: &UserId) -> Result<Vec<String>, RepositoryError>;
        }
    }

    mock! {
        pub SuggestionRepo {}

        #[async_trait]
        impl SuggestionRepository for SuggestionRepo {
            async fn save(&self, suggestion: &Suggestion, user_id: &UserId) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Generator {}

        #[async_trait]
        impl SuggestionGeneratorService for Generator {
            fn check_configuration(&self) -> Result<(), SuggestionError>;

            async fn generate(
                &self,
                profile: &SuggestionProfile,
                current_subscriptions: &[String],
            ) -> Result<Vec<Suggestion>, SuggestionError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn configured_generator() -> MockGenerator {
        let mut generator = MockGenerator::new();
        generator.expect_check_configuration().returning(|| Ok(()));
        generator
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn sample_suggestions() -> Vec<Suggestion> {
        vec![
            Suggestion {
                name: "Peloton".to_string(),
                description: "Guided fitness classes".to_string(),
                price: 12.99,
                billing_cycle: BillingCycle::Monthly,
            },
            Suggestion {
                name: "Strava".to_string(),
                description: "Activity tracking for athletes".to_string(),
                price: 5.99,
                billing_cycle: BillingCycle::Monthly,
            },
            Suggestion {
                name: "MyFitnessPal".to_string(),
                description: "Nutrition and calorie tracking".to_string(),
                price: 79.99,
                billing_cycle: BillingCycle::Yearly,
            },
        ]
    }

    fn valid_params() -> GenerateSuggestionsParams {
        GenerateSuggestionsParams {
            user_id: "u1".to_string(),
            subscriptions: vec!["Netflix".to_string()],
            interests: vec!["fitness".to_string()],
            budget: 20.0,
            country: "US".to_string(),
        }
    }

    #[tokio::test]
    async fn should_return_suggestions_and_persist_each_row_for_the_user() {
        let mut subscription_repo = MockSubscriptionRepo::new();
        subscription_repo
            .expect_get_names()
            .returning(|_| Ok(vec![]));

        let mut generator = configured_generator();
        generator
            .expect_generate()
            .returning(|_, _| Ok(sample_suggestions()));

        let mut suggestion_repo = MockSuggestionRepo::new();
        suggestion_repo
            .expect_save()
            .withf(|_, user_id| user_id.as_str() == "u1")
            .times(3)
            .returning(|_, _| Ok(()));

        let use_case = GenerateSuggestionsUseCaseImpl {
            subscription_repository: Arc::new(subscription_repo),
            suggestion_repository: Arc::new(suggestion_repo),
            generator: Arc::new(generator),
            logger: mock_logger(),
            persist: true,
        };

        let result = use_case.execute(valid_params()).await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn should_merge_stored_names_with_request_names_for_the_generator() {
        let mut subscription_repo = MockSubscriptionRepo::new();
        subscription_repo
            .expect_get_names()
            .returning(|_| Ok(vec!["Spotify".to_string(), "netflix".to_string()]));

        let mut generator = configured_generator();
        generator
            .expect_generate()
            .withf(|_, current| {
                // "netflix" from the store duplicates the request's "Netflix"
                current == ["Netflix".to_string(), "Spotify".to_string()]
            })
            .returning(|_, _| Ok(sample_suggestions()));

        let use_case = GenerateSuggestionsUseCaseImpl {
            subscription_repository: Arc::new(subscription_repo),
            suggestion_repository: Arc::new(MockSuggestionRepo::new()),
            generator: Arc::new(generator),
            logger: mock_logger(),
            persist: false,
        };

        let result = use_case.execute(valid_params()).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_fail_with_invalid_request_before_any_collaborator_call() {
        // No expectations set: any call on these mocks fails the test
        let use_case = GenerateSuggestionsUseCaseImpl {
            subscription_repository: Arc::new(MockSubscriptionRepo::new()),
            suggestion_repository: Arc::new(MockSuggestionRepo::new()),
            generator: Arc::new(MockGenerator::new()),
            logger: mock_logger(),
            persist: true,
        };

        let params = GenerateSuggestionsParams {
            interests: vec![],
            ..valid_params()
        };

        let result = use_case.execute(params).await;

        assert!(matches!(result, Err(SuggestionError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn should_not_persist_when_generator_fails() {
        let mut subscription_repo = MockSubscriptionRepo::new();
        subscription_repo
            .expect_get_names()
            .returning(|_| Ok(vec![]));

        let mut generator = configured_generator();
        generator.expect_generate().returning(|_, _| {
            Err(SuggestionError::MalformedModelOutput {
                reason: "expected JSON".to_string(),
                raw: "Sure! Here are three picks".to_string(),
            })
        });

        // Persister mock has no expectations: a save call fails the test
        let use_case = GenerateSuggestionsUseCaseImpl {
            subscription_repository: Arc::new(subscription_repo),
            suggestion_repository: Arc::new(MockSuggestionRepo::new()),
            generator: Arc::new(generator),
            logger: mock_logger(),
            persist: true,
        };

        let result = use_case.execute(valid_params()).await;

        assert!(matches!(
            result,
            Err(SuggestionError::MalformedModelOutput { .. })
        ));
    }

    #[tokio::test]
    async fn should_fail_request_when_a_row_insert_fails() {
        let mut subscription_repo = MockSubscriptionRepo::new();
        subscription_repo
            .expect_get_names()
            .returning(|_| Ok(vec![]));

        let mut generator = configured_generator();
        generator
            .expect_generate()
            .returning(|_, _| Ok(sample_suggestions()));

        let mut suggestion_repo = MockSuggestionRepo::new();
        let mut calls = 0;
        suggestion_repo
            .expect_save()
            .with(always(), always())
            .returning(move |_, _| {
                calls += 1;
                if calls == 2 {
                    Err(RepositoryError::DatabaseError)
                } else {
                    Ok(())
                }
            });

        let use_case = GenerateSuggestionsUseCaseImpl {
            subscription_repository: Arc::new(subscription_repo),
            suggestion_repository: Arc::new(suggestion_repo),
            generator: Arc::new(generator),
            logger: mock_logger(),
            persist: true,
        };

        let result = use_case.execute(valid_params()).await;

        assert!(matches!(result, Err(SuggestionError::PersistenceFailed(_))));
    }

    #[tokio::test]
    async fn should_skip_persistence_when_disabled() {
        let mut subscription_repo = MockSubscriptionRepo::new();
        subscription_repo
            .expect_get_names()
            .returning(|_| Ok(vec![]));

        let mut generator = configured_generator();
        generator
            .expect_generate()
            .returning(|_, _| Ok(sample_suggestions()));

        // No save expectations: persistence must not be touched
        let use_case = GenerateSuggestionsUseCaseImpl {
            subscription_repository: Arc::new(subscription_repo),
            suggestion_repository: Arc::new(MockSuggestionRepo::new()),
            generator: Arc::new(generator),
            logger: mock_logger(),
            persist: false,
        };

        let result = use_case.execute(valid_params()).await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn should_fail_when_subscription_lookup_fails() {
        let mut subscription_repo = MockSubscriptionRepo::new();
        subscription_repo
            .expect_get_names()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = GenerateSuggestionsUseCaseImpl {
            subscription_repository: Arc::new(subscription_repo),
            suggestion_repository: Arc::new(MockSuggestionRepo::new()),
            generator: Arc::new(configured_generator()),
            logger: mock_logger(),
            persist: true,
        };

        let result = use_case.execute(valid_params()).await;

        assert!(matches!(result, Err(SuggestionError::Repository(_))));
    }

    #[tokio::test]
    async fn should_fail_before_store_lookup_when_generator_is_misconfigured() {
        let mut generator = MockGenerator::new();
        generator
            .expect_check_configuration()
            .returning(|| Err(SuggestionError::MissingConfiguration("OPENAI_API_KEY")));

        // No expectations on the repositories: any store call fails the test
        let use_case = GenerateSuggestionsUseCaseImpl {
            subscription_repository: Arc::new(MockSubscriptionRepo::new()),
            suggestion_repository: Arc::new(MockSuggestionRepo::new()),
            generator: Arc::new(generator),
            logger: mock_logger(),
            persist: true,
        };

        let result = use_case.execute(valid_params()).await;

        assert!(matches!(
            result,
            Err(SuggestionError::MissingConfiguration("OPENAI_API_KEY"))
        ));
    }

    #[test]
    fn should_merge_names_preserving_order_and_dropping_duplicates() {
        let merged = merge_subscription_names(
            &["Netflix".to_string(), " ".to_string()],
            vec!["spotify".to_string(), "NETFLIX".to_string()],
        );

        assert_eq!(merged, vec!["Netflix".to_string(), "spotify".to_string()]);
    }
}
