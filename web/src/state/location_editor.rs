use shared_types::Position;

use crate::state::zone::{Notice, ZoneOutcome};

/// The location editor's state machine. The view feeds it events and
/// executes the commands it returns (spawning the async calls, dispatching
/// toasts); the machine itself never touches the network.
///
/// Zone checks and address lookups carry a generation number so that a
/// completion racing a newer position change is discarded instead of
/// overwriting fresher state.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationEditor {
    pub position: Option<Position>,
    pub address: String,
    pub is_valid_zone: bool,
    pub validating: bool,
    pub saving: bool,
    generation: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    /// Persisted record arrived (or turned out to have no position yet).
    Loaded {
        position: Option<Position>,
        address: Option<String>,
    },
    /// Search selection, map click, or marker drag-end.
    PositionChanged(Position),
    ValidationComplete {
        generation: u64,
        outcome: ZoneOutcome,
    },
    /// Zone check transport failure; fail closed.
    ValidationFailed { generation: u64 },
    AddressResolved { generation: u64, address: String },
    SaveRequested,
    SaveSucceeded,
    SaveFailed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    CheckZone { generation: u64, position: Position },
    ResolveAddress { generation: u64, position: Position },
    PersistLocation { position: Position },
    Notify(Notice),
}

impl Default for LocationEditor {
    fn default() -> Self {
        Self {
            position: None,
            address: String::new(),
            is_valid_zone: false,
            validating: false,
            saving: false,
            generation: 0,
        }
    }
}

impl LocationEditor {
    /// Save is a hard guard, not a UI hint: refused while the zone is
    /// invalid, while validating, or while another save is in flight.
    pub fn can_save(&self) -> bool {
        self.position.is_some() && self.is_valid_zone && !self.validating && !self.saving
    }

    pub fn apply(&mut self, event: EditorEvent) -> Vec<Command> {
        match event {
            EditorEvent::Loaded { position, address } => {
                if let Some(address) = address {
                    self.address = address;
                }
                match position {
                    Some(position) => self.begin_position(position),
                    None => Vec::new(),
                }
            }
            EditorEvent::PositionChanged(position) => self.begin_position(position),
            EditorEvent::ValidationComplete {
                generation,
                outcome,
            } => {
                if generation != self.generation {
                    return Vec::new();
                }
                self.validating = false;
                self.is_valid_zone = outcome.is_valid();
                vec![Command::Notify(outcome.notice())]
            }
            EditorEvent::ValidationFailed { generation } => {
                if generation != self.generation {
                    return Vec::new();
                }
                self.validating = false;
                self.is_valid_zone = false;
                vec![Command::Notify(Notice::ZoneCheckFailed)]
            }
            EditorEvent::AddressResolved {
                generation,
                address,
            } => {
                if generation == self.generation {
                    self.address = address;
                }
                Vec::new()
            }
            EditorEvent::SaveRequested => {
                if !self.can_save() {
                    return Vec::new();
                }
                let Some(position) = self.position else {
                    return Vec::new();
                };
                self.saving = true;
                vec![Command::PersistLocation { position }]
            }
            EditorEvent::SaveSucceeded => {
                self.saving = false;
                vec![Command::Notify(Notice::LocationSaved)]
            }
            EditorEvent::SaveFailed => {
                self.saving = false;
                vec![Command::Notify(Notice::SaveFailed)]
            }
        }
    }

    fn begin_position(&mut self, position: Position) -> Vec<Command> {
        self.generation += 1;
        self.position = Some(position);
        self.validating = true;
        vec![
            Command::CheckZone {
                generation: self.generation,
                position,
            },
            Command::ResolveAddress {
                generation: self.generation,
                position,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(lat: f64, lng: f64) -> Position {
        Position::new(lat, lng)
    }

    fn notices(commands: &[Command]) -> Vec<Notice> {
        commands
            .iter()
            .filter_map(|c| match c {
                Command::Notify(n) => Some(*n),
                _ => None,
            })
            .collect()
    }

    fn check_generation(commands: &[Command]) -> u64 {
        commands
            .iter()
            .find_map(|c| match c {
                Command::CheckZone { generation, .. } => Some(*generation),
                _ => None,
            })
            .expect("a zone check should have been issued")
    }

    #[test]
    fn load_with_position_validates_immediately() {
        let mut editor = LocationEditor::default();
        let commands = editor.apply(EditorEvent::Loaded {
            position: Some(pos(52.50, 13.40)),
            address: Some("Alexanderplatz".into()),
        });
        assert!(editor.validating);
        assert_eq!(editor.address, "Alexanderplatz");
        assert!(matches!(commands[0], Command::CheckZone { .. }));
        assert!(matches!(commands[1], Command::ResolveAddress { .. }));
    }

    #[test]
    fn load_without_position_stays_idle() {
        let mut editor = LocationEditor::default();
        let commands = editor.apply(EditorEvent::Loaded {
            position: None,
            address: None,
        });
        assert!(commands.is_empty());
        assert!(!editor.validating);
    }

    #[test]
    fn selected_zone_enables_save_with_one_success_notice() {
        let mut editor = LocationEditor::default();
        let commands = editor.apply(EditorEvent::PositionChanged(pos(52.50, 13.40)));
        let generation = check_generation(&commands);

        let commands = editor.apply(EditorEvent::ValidationComplete {
            generation,
            outcome: ZoneOutcome::Inside {
                zone: "zone-1".into(),
            },
        });
        assert!(editor.is_valid_zone);
        assert!(editor.can_save());
        assert_eq!(notices(&commands), vec![Notice::ZoneValid]);
    }

    #[test]
    fn fallback_zone_disables_save_with_fallback_warning() {
        let mut editor = LocationEditor::default();
        let commands = editor.apply(EditorEvent::PositionChanged(pos(52.50, 13.40)));
        let generation = check_generation(&commands);

        let commands = editor.apply(EditorEvent::ValidationComplete {
            generation,
            outcome: ZoneOutcome::NearFallback {
                zone: "zone-2".into(),
            },
        });
        assert!(!editor.is_valid_zone);
        assert!(!editor.can_save());
        assert_eq!(notices(&commands), vec![Notice::ZoneFallbackOnly]);
    }

    #[test]
    fn validation_transport_failure_fails_closed() {
        let mut editor = LocationEditor::default();
        let commands = editor.apply(EditorEvent::PositionChanged(pos(52.50, 13.40)));
        let generation = check_generation(&commands);

        let commands = editor.apply(EditorEvent::ValidationFailed { generation });
        assert!(!editor.is_valid_zone);
        assert_eq!(notices(&commands), vec![Notice::ZoneCheckFailed]);
        assert!(!editor.validating);
    }

    #[test]
    fn stale_validation_is_discarded() {
        let mut editor = LocationEditor::default();
        let first = editor.apply(EditorEvent::PositionChanged(pos(52.50, 13.40)));
        let stale_generation = check_generation(&first);

        // A newer position supersedes the in-flight check.
        editor.apply(EditorEvent::PositionChanged(pos(52.51, 13.41)));

        let commands = editor.apply(EditorEvent::ValidationComplete {
            generation: stale_generation,
            outcome: ZoneOutcome::Inside {
                zone: "zone-1".into(),
            },
        });
        assert!(commands.is_empty());
        assert!(!editor.is_valid_zone);
        assert!(editor.validating);
    }

    #[test]
    fn stale_address_is_discarded() {
        let mut editor = LocationEditor::default();
        let first = editor.apply(EditorEvent::PositionChanged(pos(52.50, 13.40)));
        let stale_generation = check_generation(&first);
        editor.apply(EditorEvent::PositionChanged(pos(52.51, 13.41)));

        editor.apply(EditorEvent::AddressResolved {
            generation: stale_generation,
            address: "Old Street 1".into(),
        });
        assert_eq!(editor.address, "");
    }

    #[test]
    fn save_refused_while_invalid_even_programmatically() {
        let mut editor = LocationEditor::default();
        editor.apply(EditorEvent::PositionChanged(pos(52.50, 13.40)));
        // Validation has not completed; save must not issue the mutation.
        let commands = editor.apply(EditorEvent::SaveRequested);
        assert!(commands.is_empty());
        assert!(!editor.saving);
    }

    #[test]
    fn save_is_not_reentrant() {
        let mut editor = valid_editor();
        let first = editor.apply(EditorEvent::SaveRequested);
        assert!(matches!(first[0], Command::PersistLocation { .. }));

        let second = editor.apply(EditorEvent::SaveRequested);
        assert!(second.is_empty());
    }

    #[test]
    fn save_failure_retains_position_and_validity() {
        let mut editor = valid_editor();
        let position = editor.position;
        editor.apply(EditorEvent::SaveRequested);

        let commands = editor.apply(EditorEvent::SaveFailed);
        assert_eq!(notices(&commands), vec![Notice::SaveFailed]);
        assert!(!editor.saving);
        assert!(editor.is_valid_zone);
        assert_eq!(editor.position, position);
        assert!(editor.can_save());
    }

    #[test]
    fn save_success_notifies_and_returns_to_idle() {
        let mut editor = valid_editor();
        editor.apply(EditorEvent::SaveRequested);
        let commands = editor.apply(EditorEvent::SaveSucceeded);
        assert_eq!(notices(&commands), vec![Notice::LocationSaved]);
        assert!(editor.can_save());
    }

    fn valid_editor() -> LocationEditor {
        let mut editor = LocationEditor::default();
        let commands = editor.apply(EditorEvent::PositionChanged(pos(52.50, 13.40)));
        let generation = check_generation(&commands);
        editor.apply(EditorEvent::ValidationComplete {
            generation,
            outcome: ZoneOutcome::Inside {
                zone: "zone-1".into(),
            },
        });
        editor
    }
}
