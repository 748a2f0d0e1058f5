//! ホバー遅延タスク
//!
//! ポインタ進入からポップアップ表示までの固定遅延を管理する、
//! キャンセル可能な遅延実行の抽象。`schedule` は保留中の予約を
//! 置き換え、`cancel` は破棄する（本システム唯一のキャンセル動作）。

use gloo::timers::callback::Timeout;

/// キャンセル可能な遅延タスク
#[derive(Default)]
pub struct DeferredTask {
    pending: Option<Timeout>,
}

impl DeferredTask {
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// 遅延後に実行するタスクを予約する
    ///
    /// 既に予約があれば取り消してから置き換える（再進入時の挙動）。
    pub fn schedule<F>(&mut self, delay_ms: u32, task: F)
    where
        F: FnOnce() + 'static,
    {
        self.cancel();
        self.pending = Some(Timeout::new(delay_ms, task));
    }

    /// 保留中のタスクを取り消す
    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.cancel();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_schedule_and_cancel() {
        let mut task = DeferredTask::new();
        assert!(!task.is_pending());

        task.schedule(1_000, || {});
        assert!(task.is_pending());

        task.cancel();
        assert!(!task.is_pending());
    }

    #[wasm_bindgen_test]
    fn test_schedule_replaces_pending() {
        let mut task = DeferredTask::new();
        task.schedule(1_000, || {});
        task.schedule(1_000, || {});
        assert!(task.is_pending());

        task.cancel();
    }
}
