use std::sync::mpsc::{self, Receiver, SendError, Sender, TryRecvError};

use crate::kernel::WorkspaceEvent;

#[derive(Clone)]
pub struct EventSender {
    tx: Sender<WorkspaceEvent>,
}

pub struct EventReceiver {
    rx: Receiver<WorkspaceEvent>,
}

/// FIFO queue between UI collaborators and the controller.
pub fn event_bus() -> (EventSender, EventReceiver) {
    let (tx, rx) = mpsc::channel();
    (EventSender { tx }, EventReceiver { rx })
}

impl EventSender {
    pub fn send(&self, event: WorkspaceEvent) -> Result<(), SendError<WorkspaceEvent>> {
        self.tx.send(event)
    }
}

impl EventReceiver {
    pub fn try_recv(&mut self) -> Result<WorkspaceEvent, TryRecvError> {
        self.rx.try_recv()
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/services/bus.rs"]
mod tests;
