use crate::core::Model;
use std::sync::Arc;

/// Snapshot des Modells vor einer rückgängig machbaren Operation.
///
/// Nutzt Arc-Clone (Copy-on-Write): Das Erstellen eines Snapshots ist O(1);
/// der Modell-Klon findet erst beim nächsten `Arc::make_mut()` in einem
/// Use-Case statt.
#[derive(Clone)]
pub struct Snapshot {
    /// Modell-Zustand (Arc-Klon)
    pub model: Arc<Model>,
    /// Name der Operation (z.B. "Flächenteilung: Parallele Linien")
    pub label: String,
}

impl Snapshot {
    /// Erstellt einen O(1)-Snapshot mit Operationsnamen.
    pub fn new(model: &Arc<Model>, label: impl Into<String>) -> Self {
        Self {
            model: Arc::clone(model),
            label: label.into(),
        }
    }
}

/// Undo/Redo-Manager mit benannten Snapshots.
#[derive(Default)]
pub struct EditHistory {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    max_depth: usize,
}

impl EditHistory {
    /// Erstellt einen neuen History-Manager mit maximaler Tiefe.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::with_capacity(max_depth),
            redo_stack: Vec::with_capacity(max_depth),
            max_depth,
        }
    }

    /// Legt einen Snapshot ab und verwirft den Redo-Stack.
    pub fn record_snapshot(&mut self, snap: Snapshot) {
        if self.max_depth == 0 {
            return;
        }
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(snap);
        self.redo_stack.clear();
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Name der Operation, die ein Undo zurücknehmen würde.
    pub fn undo_label(&self) -> Option<&str> {
        self.undo_stack.last().map(|snap| snap.label.as_str())
    }

    /// Name der Operation, die ein Redo wiederherstellen würde.
    pub fn redo_label(&self) -> Option<&str> {
        self.redo_stack.last().map(|snap| snap.label.as_str())
    }

    /// Nimmt den letzten Undo-Snapshot und legt `current` unter gleichem Namen
    /// auf den Redo-Stack. Gibt den wiederherzustellenden Snapshot zurück.
    pub fn pop_undo_with_current(&mut self, current: Arc<Model>) -> Option<Snapshot> {
        let prev = self.undo_stack.pop()?;
        if self.redo_stack.len() >= self.max_depth {
            self.redo_stack.remove(0);
        }
        self.redo_stack.push(Snapshot {
            model: current,
            label: prev.label.clone(),
        });
        Some(prev)
    }

    /// Gegenstück zu `pop_undo_with_current`.
    pub fn pop_redo_with_current(&mut self, current: Arc<Model>) -> Option<Snapshot> {
        let next = self.redo_stack.pop()?;
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(Snapshot {
            model: current,
            label: next.label.clone(),
        });
        Some(next)
    }
}
