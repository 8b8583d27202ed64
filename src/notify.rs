// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Artian-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Artian and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Transient status messages with a single cancellable dismissal timer.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

pub const DEFAULT_TOAST_TTL: Duration = Duration::from_millis(2500);

#[derive(Debug, Default)]
struct ToastSlot {
    generation: u64,
    message: Option<String>,
}

/// Holds at most one visible message and at most one pending dismissal task.
///
/// `show` replaces the message and the timer (last message wins). The dismissal task only clears
/// the slot if no newer message was posted since it was scheduled, so an aborted task that already
/// woke up cannot erase its successor.
#[derive(Debug)]
pub struct ToastNotifier {
    slot: Arc<Mutex<ToastSlot>>,
    ttl: Duration,
    runtime: Option<Handle>,
    pending: Option<JoinHandle<()>>,
}

impl ToastNotifier {
    pub fn new(runtime: Handle, ttl: Duration) -> Self {
        Self {
            slot: Arc::default(),
            ttl,
            runtime: Some(runtime),
            pending: None,
        }
    }

    /// Uses the ambient tokio runtime if there is one.
    pub fn from_current(ttl: Duration) -> Self {
        match Handle::try_current() {
            Ok(runtime) => Self::new(runtime, ttl),
            Err(_) => Self::detached(),
        }
    }

    /// Without a runtime, messages stay until replaced or dismissed.
    pub fn detached() -> Self {
        Self {
            slot: Arc::default(),
            ttl: DEFAULT_TOAST_TTL,
            runtime: None,
            pending: None,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn show(&mut self, message: impl Into<String>) {
        let message = message.into();
        log::debug!("toast: {message}");

        let generation = {
            let mut slot = lock(&self.slot);
            slot.generation = slot.generation.wrapping_add(1);
            slot.message = Some(message);
            slot.generation
        };

        self.cancel_pending();
        let Some(runtime) = &self.runtime else {
            return;
        };
        let slot = Arc::clone(&self.slot);
        let ttl = self.ttl;
        self.pending = Some(runtime.spawn(async move {
            tokio::time::sleep(ttl).await;
            let mut slot = lock(&slot);
            if slot.generation == generation {
                slot.message = None;
            }
        }));
    }

    pub fn current(&self) -> Option<String> {
        lock(&self.slot).message.clone()
    }

    pub fn dismiss(&mut self) {
        self.cancel_pending();
        let mut slot = lock(&self.slot);
        slot.generation = slot.generation.wrapping_add(1);
        slot.message = None;
    }

    pub fn has_pending_timer(&self) -> bool {
        self.pending.as_ref().is_some_and(|task| !task.is_finished())
    }

    fn cancel_pending(&mut self) {
        if let Some(task) = self.pending.take() {
            task.abort();
        }
    }
}

impl Drop for ToastNotifier {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}

fn lock(slot: &Mutex<ToastSlot>) -> MutexGuard<'_, ToastSlot> {
    slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
