//! Candidate actions offered for a turn

/// One action for one active slot
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Action {
    /// Use the move in `slot` (0-indexed) of the acting Pokemon
    Move {
        slot: usize,
        id: String,
        #[cfg_attr(feature = "serde", serde(default))]
        target: Option<i8>,
    },

    /// Switch to the team member at `index` (0-indexed party position)
    Switch { index: usize, name: String },

    /// Team preview order (0-indexed party positions, leads first)
    TeamPick { order: Vec<usize> },

    Pass,
}

impl Action {
    pub fn move_slot(slot: usize, id: impl Into<String>) -> Self {
        Action::Move {
            slot,
            id: id.into(),
            target: None,
        }
    }

    pub fn switch(index: usize, name: impl Into<String>) -> Self {
        Action::Switch {
            index,
            name: name.into(),
        }
    }

    /// Identifier used to detect the same move or switch repeated across
    /// turns. `None` for team picks, passes and moves given only by slot.
    pub fn identifier(&self) -> Option<String> {
        match self {
            Action::Move { id, .. } if id.is_empty() => None,
            Action::Move { id, .. } => Some(id.clone()),
            Action::Switch { name, .. } => Some(format!("switch-{name}")),
            Action::TeamPick { .. } | Action::Pass => None,
        }
    }

    /// Showdown choice fragment ("move 1", "switch 3", "team 213", "pass")
    pub fn to_choice(&self) -> String {
        match self {
            Action::Move {
                slot,
                target: Some(target),
                ..
            } => format!("move {} {}", slot + 1, target),
            Action::Move { slot, .. } => format!("move {}", slot + 1),
            Action::Switch { index, .. } => format!("switch {}", index + 1),
            Action::TeamPick { order } => {
                let order: String = order.iter().map(|i| (i + 1).to_string()).collect();
                format!("team {order}")
            }
            Action::Pass => "pass".to_string(),
        }
    }
}

/// The actions submitted together for one turn, one per active slot
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ActionSet {
    pub actions: Vec<Action>,
}

impl ActionSet {
    pub fn new(actions: Vec<Action>) -> Self {
        Self { actions }
    }

    pub fn single(action: Action) -> Self {
        Self {
            actions: vec![action],
        }
    }

    /// The first action, which names the set for repetition tracking
    pub fn primary(&self) -> Option<&Action> {
        self.actions.first()
    }

    pub fn identifier(&self) -> Option<String> {
        self.primary().and_then(Action::identifier)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Action> {
        self.actions.iter()
    }

    /// Full choice string, slots joined with ", "
    pub fn to_choice(&self) -> String {
        self.actions
            .iter()
            .map(Action::to_choice)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl From<Action> for ActionSet {
    fn from(action: Action) -> Self {
        Self::single(action)
    }
}
