/// A completed drop that should be applied with [`crate::Draft::reorder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowMove {
    pub group: String,
    pub from: usize,
    pub to: usize,
}

/// Page-wide drag-and-drop state. A drag is a single pointer interaction,
/// so at most one row is ever being dragged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragGesture {
    #[default]
    Idle,
    Dragging { group: String, from: usize },
}

impl DragGesture {
    pub fn start(&mut self, group: &str, index: usize) {
        *self = Self::Dragging {
            group: group.to_string(),
            from: index,
        };
    }

    /// Whether a drag-over should be accepted as a drop target.
    pub fn accepts_over(&self) -> bool {
        self.is_active()
    }

    /// Finish the drag on row `index` of `group`. Always returns to idle;
    /// yields a move only for a different row in the same group.
    pub fn drop_on(&mut self, group: &str, index: usize) -> Option<RowMove> {
        match std::mem::take(self) {
            Self::Dragging { group: source, from } if source == group && from != index => {
                Some(RowMove {
                    group: source,
                    from,
                    to: index,
                })
            }
            _ => None,
        }
    }

    /// Drag ended without a valid drop.
    pub fn end(&mut self) {
        *self = Self::Idle;
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    pub fn is_dragging_group(&self, group: &str) -> bool {
        matches!(self, Self::Dragging { group: g, .. } if g == group)
    }

    pub fn is_dragging_row(&self, group: &str, index: usize) -> bool {
        matches!(self, Self::Dragging { group: g, from } if g == group && *from == index)
    }
}
