//! Conversation simulation for Sakhi chat surfaces.
//!
//! Each chat surface (the floating widget, the queries panel) owns one
//! [`ConversationSimulator`]: an append-only transcript plus a small state
//! machine that produces a canned assistant reply for every accepted user
//! submission after an artificial delay.

pub mod rules;

use sakhi_core::SakhiError;
use sakhi_core::chat::{ChatMessage, ChatState, MessageRole};
use sakhi_core::error::Result;
use sakhi_core::id::{IdSource, UuidIdSource};
use sakhi_core::locale::Localizer;
use sakhi_core::profile::ProfileDirectory;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

/// Manages one conversation transcript and produces a simulated assistant
/// reply for each accepted user message.
///
/// The simulator moves between two states: `Idle` (submissions accepted)
/// and `AwaitingReply` (exactly one reply scheduled; further submissions
/// rejected). Replies are classified by [`rules::classify`] and rendered
/// through the shared [`Localizer`]; the generic fallback interpolates the
/// selected profile's crop type, which is the simulator's only (read-only)
/// dependency on the profile directory.
pub struct ConversationSimulator {
    /// Append-only transcript for this surface
    transcript: Arc<RwLock<Vec<ChatMessage>>>,
    /// Current conversation state
    state: Arc<RwLock<ChatState>>,
    /// Handle of the scheduled reply task, if one is pending
    pending_reply: Mutex<Option<JoinHandle<()>>>,
    /// Localized-string lookup for reply templates and suggestions
    localizer: Arc<dyn Localizer>,
    /// Shared profile directory, read at reply time for crop interpolation
    directory: Arc<RwLock<ProfileDirectory>>,
    /// Source of message ids
    ids: Arc<dyn IdSource>,
    /// Artificial "thinking time" before a reply lands
    reply_delay: Duration,
}

impl ConversationSimulator {
    /// Creates a simulator with an empty transcript and UUID message ids.
    pub fn new(
        localizer: Arc<dyn Localizer>,
        directory: Arc<RwLock<ProfileDirectory>>,
        reply_delay: Duration,
    ) -> Self {
        Self::with_id_source(localizer, directory, reply_delay, Arc::new(UuidIdSource))
    }

    /// Creates a simulator with a caller-supplied id source.
    pub fn with_id_source(
        localizer: Arc<dyn Localizer>,
        directory: Arc<RwLock<ProfileDirectory>>,
        reply_delay: Duration,
        ids: Arc<dyn IdSource>,
    ) -> Self {
        Self {
            transcript: Arc::new(RwLock::new(Vec::new())),
            state: Arc::new(RwLock::new(ChatState::Idle)),
            pending_reply: Mutex::new(None),
            localizer,
            directory,
            ids,
            reply_delay,
        }
    }

    /// Appends the localized assistant greeting to the transcript.
    ///
    /// Chat surfaces call this once when they open, matching the greeting
    /// bubble the user sees before typing anything. The greeting carries
    /// the starter suggestion set.
    pub async fn seed_greeting(&self) {
        let greeting = ChatMessage {
            id: self.ids.next_id(),
            role: MessageRole::Assistant,
            text: self.localizer.t("chat.greeting"),
            timestamp: chrono::Utc::now().to_rfc3339(),
            suggestions: rules::STARTER_SUGGESTION_KEYS
                .iter()
                .map(|key| self.localizer.t(key))
                .collect(),
        };
        self.transcript.write().await.push(greeting);
    }

    /// Submits a user message and schedules the assistant reply.
    ///
    /// On success the user message is appended to the transcript, the
    /// state moves to `AwaitingReply`, and the reply lands after the
    /// configured delay. Selecting a suggestion chip is equivalent to
    /// calling this with the suggestion's text.
    ///
    /// # Errors
    ///
    /// Returns `SakhiError::InvalidSubmission` when the trimmed text is
    /// empty or a reply is already pending; the transcript and state are
    /// left untouched.
    pub async fn submit(&self, text: &str) -> Result<()> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(SakhiError::invalid_submission("message text is empty"));
        }

        let mut state = self.state.write().await;
        if *state == ChatState::AwaitingReply {
            return Err(SakhiError::invalid_submission(
                "a reply is already pending for this conversation",
            ));
        }

        let message = ChatMessage {
            id: self.ids.next_id(),
            role: MessageRole::User,
            text: trimmed.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            suggestions: Vec::new(),
        };
        self.transcript.write().await.push(message);
        *state = ChatState::AwaitingReply;
        drop(state);

        tracing::debug!("user message accepted, reply scheduled");
        self.schedule_reply(trimmed.to_string());
        Ok(())
    }

    /// Returns a snapshot of the transcript in insertion order.
    pub async fn transcript(&self) -> Vec<ChatMessage> {
        self.transcript.read().await.clone()
    }

    /// Returns the current conversation state.
    pub async fn state(&self) -> ChatState {
        *self.state.read().await
    }

    /// Cancels a pending reply, if any, and returns the state to `Idle`.
    ///
    /// Call when the surface is torn down; a cancelled reply never
    /// appends to the transcript.
    pub async fn close(&self) {
        self.abort_pending();
        *self.state.write().await = ChatState::Idle;
    }

    fn abort_pending(&self) {
        if let Some(handle) = self.pending_reply.lock().unwrap().take() {
            handle.abort();
            tracing::debug!("pending reply cancelled");
        }
    }

    fn schedule_reply(&self, submitted: String) {
        let transcript = Arc::clone(&self.transcript);
        let state = Arc::clone(&self.state);
        let localizer = Arc::clone(&self.localizer);
        let directory = Arc::clone(&self.directory);
        let ids = Arc::clone(&self.ids);
        let delay = self.reply_delay;

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let selected_crop = directory
                .read()
                .await
                .selected()
                .map(|profile| profile.crop_type.clone());
            let (text, suggestions) =
                compose_reply(localizer.as_ref(), selected_crop, &submitted);
            let reply = ChatMessage {
                id: ids.next_id(),
                role: MessageRole::Assistant,
                text,
                timestamp: chrono::Utc::now().to_rfc3339(),
                suggestions,
            };

            transcript.write().await.push(reply);
            *state.write().await = ChatState::Idle;
            tracing::debug!("assistant reply appended");
        });

        *self.pending_reply.lock().unwrap() = Some(handle);
    }
}

impl Drop for ConversationSimulator {
    fn drop(&mut self) {
        self.abort_pending();
    }
}

/// Produces the reply text and suggestion list for a submission.
///
/// Keyword branches render their fixed template; the fallback branch
/// interpolates the submitted text and the selected crop (or the localized
/// "your crops" phrase) into the generic template.
fn compose_reply(
    localizer: &dyn Localizer,
    selected_crop: Option<String>,
    submitted: &str,
) -> (String, Vec<String>) {
    match rules::classify(submitted) {
        Some(rule) => {
            let text = localizer.t(rule.reply_key);
            let suggestions = rule
                .suggestion_keys
                .iter()
                .map(|key| localizer.t(key))
                .collect();
            (text, suggestions)
        }
        None => {
            let crop = selected_crop.unwrap_or_else(|| localizer.t("chat.crops.generic"));
            let text = localizer
                .t("chat.reply.generic")
                .replace("{query}", submitted)
                .replace("{crop}", &crop);
            let suggestions = rules::STARTER_SUGGESTION_KEYS
                .iter()
                .map(|key| localizer.t(key))
                .collect();
            (text, suggestions)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sakhi_core::id::SequentialIdSource;
    use sakhi_core::locale::{CatalogLocalizer, Language};
    use sakhi_core::profile::ProfileDraft;

    const DELAY: Duration = Duration::from_millis(1000);

    fn draft() -> ProfileDraft {
        ProfileDraft {
            name: "Ravi".to_string(),
            age: 40,
            contact: "999".to_string(),
            location: "Kochi".to_string(),
            land_size: "2 acres".to_string(),
            crop_type: "Rice".to_string(),
            soil_type: "Clay".to_string(),
            irrigation_method: "Flood".to_string(),
        }
    }

    fn simulator() -> (ConversationSimulator, Arc<dyn Localizer>, Arc<RwLock<ProfileDirectory>>) {
        let localizer: Arc<dyn Localizer> = Arc::new(CatalogLocalizer::default());
        let directory = Arc::new(RwLock::new(ProfileDirectory::with_id_source(Arc::new(
            SequentialIdSource::new(),
        ))));
        let simulator = ConversationSimulator::with_id_source(
            Arc::clone(&localizer),
            Arc::clone(&directory),
            DELAY,
            Arc::new(SequentialIdSource::new()),
        );
        (simulator, localizer, directory)
    }

    /// Lets the scheduled reply fire under the paused test clock.
    async fn run_out_the_delay() {
        tokio::time::sleep(DELAY + Duration::from_millis(100)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_weather_submission_yields_weather_template() {
        let (simulator, localizer, _) = simulator();

        simulator.submit("What's the weather?").await.unwrap();
        assert_eq!(simulator.state().await, ChatState::AwaitingReply);

        run_out_the_delay().await;

        let transcript = simulator.transcript().await;
        assert_eq!(transcript.len(), 2);
        let reply = &transcript[1];
        assert_eq!(reply.role, MessageRole::Assistant);
        assert_eq!(reply.text, localizer.t("chat.reply.weather"));
        assert_eq!(reply.suggestions.len(), 3);
        assert_eq!(reply.suggestions[0], localizer.t("chat.suggest.weather.1"));
        assert_eq!(simulator.state().await, ChatState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_submission_is_a_rejected_no_op() {
        let (simulator, _, _) = simulator();

        for text in ["", "   ", "\n\t"] {
            let err = simulator.submit(text).await.unwrap_err();
            assert!(err.is_invalid_submission());
        }

        assert!(simulator.transcript().await.is_empty());
        assert_eq!(simulator.state().await, ChatState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_while_awaiting_reply_is_rejected() {
        let (simulator, _, _) = simulator();

        simulator.submit("first question").await.unwrap();
        let err = simulator.submit("second question").await.unwrap_err();
        assert!(err.is_invalid_submission());

        run_out_the_delay().await;

        // exactly one user message and one reply made it through
        let transcript = simulator.transcript().await;
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript[0].text, "first question");

        // back to Idle, submissions are accepted again
        simulator.submit("second question").await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_fallback_interpolates_selected_crop() {
        let (simulator, _, directory) = simulator();
        directory.write().await.create(draft()).unwrap();

        simulator.submit("how are my fields doing").await.unwrap();
        run_out_the_delay().await;

        let transcript = simulator.transcript().await;
        let reply = &transcript[1];
        assert!(reply.text.contains("how are my fields doing"));
        assert!(reply.text.contains("Rice"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_fallback_without_selection_names_generic_crops() {
        let (simulator, localizer, _) = simulator();

        simulator.submit("how are my fields doing").await.unwrap();
        run_out_the_delay().await;

        let transcript = simulator.transcript().await;
        assert!(transcript[1].text.contains(&localizer.t("chat.crops.generic")));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_follows_active_language() {
        let (simulator, localizer, _) = simulator();
        localizer.set_language(Language::Ml);

        // the English keyword still matches with Malayalam active
        simulator.submit("weather report please").await.unwrap();
        run_out_the_delay().await;

        let transcript = simulator.transcript().await;
        assert_eq!(transcript[1].text, localizer.t("chat.reply.weather"));
        assert!(transcript[1].text.contains("മഴ"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_close_cancels_pending_reply() {
        let (simulator, _, _) = simulator();

        simulator.submit("What's the weather?").await.unwrap();
        simulator.close().await;

        run_out_the_delay().await;

        // no reply leaked into the transcript after teardown
        let transcript = simulator.transcript().await;
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript[0].role, MessageRole::User);
        assert_eq!(simulator.state().await, ChatState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_greeting_carries_starter_suggestions() {
        let (simulator, localizer, _) = simulator();

        simulator.seed_greeting().await;

        let transcript = simulator.transcript().await;
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript[0].role, MessageRole::Assistant);
        assert_eq!(transcript[0].text, localizer.t("chat.greeting"));
        assert_eq!(transcript[0].suggestions.len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_end_to_end_profile_then_fertilizer_query() {
        let (simulator, localizer, directory) = simulator();

        let created = directory.write().await.create(draft()).unwrap();
        {
            let dir = directory.read().await;
            assert_eq!(dir.list().len(), 1);
            assert_eq!(dir.selected().unwrap().name, "Ravi");
            assert_eq!(dir.selected().unwrap().id, created.id);
        }

        simulator.submit("fertilizer advice").await.unwrap();
        run_out_the_delay().await;

        let transcript = simulator.transcript().await;
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript[1].role, MessageRole::Assistant);
        assert_eq!(transcript[1].text, localizer.t("chat.reply.fertilizer"));
    }
}
