//! The "AI" sector-match simulation.
//!
//! There is no model anywhere near this: progress ticks on a fixed cadence,
//! completion lands at a fixed offset, and the suggestion comes from linear
//! keyword matching over the static sector catalog. Blank input never
//! starts a run.

use std::time::Duration;

use csrimpact_bridge::MessageFromBackend;
use csrimpact_bridge::catalog;
use csrimpact_bridge::notification::NotificationKind;

use super::{AppContextHandle, notification_center};

/// Cadence of progress updates.
pub const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Percent added per tick.
pub const TICK_PERCENT: u8 = 4;

/// Fixed offset at which the analysis "completes", regardless of ticks.
pub const COMPLETION_DURATION: Duration = Duration::from_millis(2000);

/// Pause between hitting 100% and revealing the suggestion.
pub const REVEAL_DELAY: Duration = Duration::from_millis(600);

/// Starts the sector-match simulation over a mission description (see
/// [`csrimpact_bridge::MessageToBackend::AnalyzeMissionRequest`]).
///
/// A newer request replaces a still-running one.
pub async fn handle_analyze_mission(context: AppContextHandle, description: String) {
    let Some(sector) = catalog::suggest_sector(&description) else {
        log::debug!("Ignoring sector analysis request with a blank description");
        return;
    };

    {
        let mut state = context.state.write().await;
        if let Some(previous) = state.analysis_task.take() {
            previous.abort();
        }
    }

    log::info!("Matching mission description against sectors");
    let task_context = context.clone();
    let handle = tokio::spawn(async move {
        let ticks = (100 / TICK_PERCENT) as u32;
        for tick in 1..=ticks {
            tokio::time::sleep(TICK_INTERVAL).await;
            task_context
                .send(MessageFromBackend::AnalysisProgress {
                    percent: (tick as u8 * TICK_PERCENT).min(100),
                })
                .await;
        }

        // The progress bar parks at 100% until the fixed completion point,
        // then the reveal delay runs.
        tokio::time::sleep(COMPLETION_DURATION.saturating_sub(TICK_INTERVAL * ticks)).await;
        tokio::time::sleep(REVEAL_DELAY).await;

        task_context
            .send(MessageFromBackend::AnalysisCompleted { sector_id: sector.id })
            .await;
        notification_center::show(
            &task_context,
            NotificationKind::Info,
            "AI Analysis Complete: Sector Suggestion Ready.",
        )
        .await;
    });

    context.state.write().await.analysis_task = Some(handle);
}

/// Aborts an in-flight analysis, e.g. when the login view switches roles.
pub async fn handle_cancel_analysis(context: AppContextHandle) {
    let mut state = context.state.write().await;
    if let Some(task) = state.analysis_task.take() {
        task.abort();
        log::debug!("Cancelled a running sector analysis");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::{drain, test_context};
    use tokio::time::advance;

    #[tokio::test(start_paused = true)]
    async fn blank_description_never_starts_a_run() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let (context, mut rx) = test_context(dir.path());

        handle_analyze_mission(context.clone(), "   ".into()).await;
        assert!(context.state.read().await.analysis_task.is_none());

        advance(COMPLETION_DURATION + REVEAL_DELAY).await;
        tokio::task::yield_now().await;
        assert!(drain(&mut rx).is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn progress_reaches_hundred_then_reveals_the_suggestion() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let (context, mut rx) = test_context(dir.path());

        handle_analyze_mission(
            context.clone(),
            "Mobile clinics bringing doctors to remote villages".into(),
        )
        .await;
        tokio::task::yield_now().await;

        // 25 ticks of 4% each.
        advance(TICK_INTERVAL * 25).await;
        let percents: Vec<u8> = drain(&mut rx)
            .into_iter()
            .map(|message| match message {
                MessageFromBackend::AnalysisProgress { percent } => percent,
                other => panic!("unexpected message: {other:?}"),
            })
            .collect();
        assert_eq!(percents.first(), Some(&4));
        assert_eq!(percents.last(), Some(&100));
        assert_eq!(percents.len(), 25);

        // Nothing more until completion + reveal.
        advance(COMPLETION_DURATION - TICK_INTERVAL * 25).await;
        assert!(drain(&mut rx).is_empty());
        advance(REVEAL_DELAY).await;
        tokio::task::yield_now().await;

        let messages = drain(&mut rx);
        assert!(messages.iter().any(|message| matches!(
            message,
            MessageFromBackend::AnalysisCompleted { sector_id: "health" }
        )));
        assert!(messages.iter().any(|message| matches!(
            message,
            MessageFromBackend::NotificationsChanged { .. }
        )));
    }

    #[tokio::test(start_paused = true)]
    async fn a_newer_request_replaces_the_running_one() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let (context, mut rx) = test_context(dir.path());

        handle_analyze_mission(context.clone(), "planting trees".into()).await;
        tokio::task::yield_now().await;
        handle_analyze_mission(context.clone(), "coding classes for students".into()).await;
        tokio::task::yield_now().await;

        advance(COMPLETION_DURATION + REVEAL_DELAY).await;
        tokio::task::yield_now().await;

        let completions: Vec<&'static str> = drain(&mut rx)
            .into_iter()
            .filter_map(|message| match message {
                MessageFromBackend::AnalysisCompleted { sector_id } => Some(sector_id),
                _ => None,
            })
            .collect();
        assert_eq!(completions, vec!["edu"]);
    }
}
