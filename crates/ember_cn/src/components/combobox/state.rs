//! Combobox interaction state
//!
//! Pure state machine behind the combobox widget. It owns no elements and
//! no callbacks: the builder feeds it [`ComboboxInput`]s and acts on the
//! returned [`Transition`].
//!
//! ```text
//!            focus / input / ArrowUp / ArrowDown / toggle
//!   Closed ─────────────────────────────────────────────▶ Open
//!     ▲                                                    │
//!     │   Escape / Tab / blur / toggle  (restore text)     │
//!     ├────────────────────────────────────────────────────┤
//!     │   click option / Enter          (commit)           │
//!     └────────────────────────────────────────────────────┘
//! ```

use ember_core::events::Key;

/// An option in the combobox dropdown
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComboboxOption {
    /// The value reported on commit
    pub value: String,
    /// Text shown in the list and in the input once committed
    pub label: String,
    pub disabled: bool,
}

impl ComboboxOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }

    /// Mark this option as disabled
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Case-insensitive substring match on the label
    pub fn matches(&self, query: &str) -> bool {
        query.is_empty() || self.label.to_lowercase().contains(&query.to_lowercase())
    }

    /// Whether click and Enter may commit this option
    pub fn is_selectable(&self) -> bool {
        !self.disabled
    }
}

/// Indices of the options whose label contains `query`, in list order
pub fn filter_options(options: &[ComboboxOption], query: &str) -> Vec<usize> {
    if query.is_empty() {
        return (0..options.len()).collect();
    }
    let query = query.to_lowercase();
    options
        .iter()
        .enumerate()
        .filter(|(_, opt)| opt.label.to_lowercase().contains(&query))
        .map(|(i, _)| i)
        .collect()
}

/// Label to show for a committed value
///
/// Falls back to the raw value for values not in the list (created entries).
pub fn label_for(options: &[ComboboxOption], value: Option<&str>) -> String {
    match value {
        Some(value) => options
            .iter()
            .find(|opt| opt.value == value)
            .map(|opt| opt.label.clone())
            .unwrap_or_else(|| value.to_string()),
        None => String::new(),
    }
}

/// Inputs the combobox reacts to
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ComboboxInput {
    Focus,
    Blur,
    /// New content of the text input
    Input(String),
    Key(Key),
    /// Click on the option at this index of the full option list
    ClickOption(usize),
    /// Click on the trigger button
    Toggle,
}

/// A committed selection
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Commit {
    pub value: String,
    /// The value was typed, not picked from the list
    pub created: bool,
}

/// Outcome of feeding one input to the state machine
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transition {
    pub commit: Option<Commit>,
    /// The host's default action for the event should be suppressed
    pub prevent_default: bool,
}

impl Transition {
    fn none() -> Self {
        Self::default()
    }

    fn handled() -> Self {
        Self {
            commit: None,
            prevent_default: true,
        }
    }
}

/// State owned by one combobox instance
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComboboxState {
    pub is_open: bool,
    /// Current input content, distinct from the committed value
    pub search_text: String,
    pub selected_value: Option<String>,
    /// Index into the filtered list
    pub highlighted_index: usize,
    /// The list is narrowed by `search_text`. Off right after opening so the
    /// full list shows even when the input holds the committed label.
    filtering: bool,
}

impl ComboboxState {
    /// Closed state showing the label of `value`
    pub fn with_value(value: Option<String>, options: &[ComboboxOption]) -> Self {
        let search_text = label_for(options, value.as_deref());
        Self {
            is_open: false,
            search_text,
            selected_value: value,
            highlighted_index: 0,
            filtering: false,
        }
    }

    pub fn is_filtering(&self) -> bool {
        self.filtering
    }

    /// Indices (into `options`) of the options currently listed
    pub fn visible(&self, options: &[ComboboxOption]) -> Vec<usize> {
        if self.filtering {
            filter_options(options, &self.search_text)
        } else {
            (0..options.len()).collect()
        }
    }

    /// Index (into `options`) of the highlighted option, if any
    pub fn highlighted_option(&self, options: &[ComboboxOption]) -> Option<usize> {
        if !self.is_open {
            return None;
        }
        let visible = self.visible(options);
        let last = visible.len().checked_sub(1)?;
        visible.get(self.highlighted_index.min(last)).copied()
    }

    /// Follow an externally controlled value
    ///
    /// Returns true when the state changed. The input text is only rewritten
    /// while closed so an in-progress search is not clobbered.
    pub fn sync_value(&mut self, value: Option<&str>, options: &[ComboboxOption]) -> bool {
        if self.selected_value.as_deref() == value {
            return false;
        }
        self.selected_value = value.map(str::to_string);
        if !self.is_open {
            self.search_text = label_for(options, value);
        }
        true
    }

    /// Feed one input; transitions are total and never fail
    pub fn handle(
        &mut self,
        input: ComboboxInput,
        options: &[ComboboxOption],
        allow_create: bool,
    ) -> Transition {
        self.clamp_highlight(options);

        match input {
            ComboboxInput::Focus => {
                if !self.is_open {
                    self.open();
                }
                Transition::none()
            }
            ComboboxInput::Blur => {
                if self.is_open {
                    self.close(options);
                }
                Transition::none()
            }
            ComboboxInput::Input(text) => {
                self.search_text = text;
                self.filtering = true;
                self.is_open = true;
                self.highlighted_index = 0;
                tracing::trace!(
                    "combobox filter {:?}: {} match(es)",
                    self.search_text,
                    self.visible(options).len()
                );
                Transition::none()
            }
            ComboboxInput::Toggle => {
                if self.is_open {
                    self.close(options);
                } else {
                    self.open();
                }
                Transition::none()
            }
            ComboboxInput::ClickOption(index) => {
                if !self.is_open || !self.visible(options).contains(&index) {
                    return Transition::none();
                }
                match options.get(index) {
                    Some(opt) if opt.is_selectable() => {
                        let opt = opt.clone();
                        self.commit_option(&opt)
                    }
                    _ => Transition::none(),
                }
            }
            ComboboxInput::Key(key) => self.handle_key(key, options, allow_create),
        }
    }

    fn handle_key(
        &mut self,
        key: Key,
        options: &[ComboboxOption],
        allow_create: bool,
    ) -> Transition {
        if !self.is_open {
            return match key {
                Key::ArrowDown | Key::ArrowUp => {
                    self.open();
                    Transition::handled()
                }
                _ => Transition::none(),
            };
        }

        let count = self.visible(options).len();
        match key {
            Key::ArrowDown => {
                if count > 0 {
                    self.highlighted_index = (self.highlighted_index + 1).min(count - 1);
                }
                Transition::handled()
            }
            Key::ArrowUp => {
                self.highlighted_index = self.highlighted_index.saturating_sub(1);
                Transition::handled()
            }
            Key::Home => {
                self.highlighted_index = 0;
                Transition::handled()
            }
            Key::End => {
                self.highlighted_index = count.saturating_sub(1);
                Transition::handled()
            }
            Key::Enter => {
                if count == 0 {
                    return match self.creatable_text(allow_create) {
                        Some(text) => self.commit_created(text, options),
                        None => Transition::handled(),
                    };
                }
                match self.highlighted_option(options).and_then(|i| options.get(i)) {
                    Some(opt) if opt.is_selectable() => {
                        let opt = opt.clone();
                        self.commit_option(&opt)
                    }
                    _ => Transition::handled(),
                }
            }
            Key::Escape => {
                self.close(options);
                Transition::handled()
            }
            Key::Tab => {
                self.close(options);
                Transition::none()
            }
            _ => Transition::none(),
        }
    }

    /// Text Enter would create, when creation applies
    ///
    /// Only text typed since the list opened counts, never the restored
    /// label of the committed value.
    pub fn creatable_text(&self, allow_create: bool) -> Option<String> {
        if !allow_create || !self.filtering {
            return None;
        }
        let text = self.search_text.trim();
        (!text.is_empty()).then(|| text.to_string())
    }

    fn clamp_highlight(&mut self, options: &[ComboboxOption]) {
        let count = self.visible(options).len();
        self.highlighted_index = self.highlighted_index.min(count.saturating_sub(1));
    }

    fn open(&mut self) {
        self.is_open = true;
        self.filtering = false;
        self.highlighted_index = 0;
    }

    fn close(&mut self, options: &[ComboboxOption]) {
        self.is_open = false;
        self.filtering = false;
        self.highlighted_index = 0;
        self.search_text = label_for(options, self.selected_value.as_deref());
    }

    fn commit_option(&mut self, opt: &ComboboxOption) -> Transition {
        tracing::debug!("combobox commit {:?}", opt.value);
        self.selected_value = Some(opt.value.clone());
        self.search_text = opt.label.clone();
        self.is_open = false;
        self.filtering = false;
        self.highlighted_index = 0;
        Transition {
            commit: Some(Commit {
                value: opt.value.clone(),
                created: false,
            }),
            prevent_default: true,
        }
    }

    fn commit_created(&mut self, text: String, options: &[ComboboxOption]) -> Transition {
        tracing::debug!("combobox create {:?}", text);
        self.search_text = label_for(options, Some(&text));
        self.selected_value = Some(text.clone());
        self.is_open = false;
        self.filtering = false;
        self.highlighted_index = 0;
        Transition {
            commit: Some(Commit {
                value: text,
                created: true,
            }),
            prevent_default: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn countries() -> Vec<ComboboxOption> {
        vec![
            ComboboxOption::new("us", "United States"),
            ComboboxOption::new("uk", "United Kingdom"),
            ComboboxOption::new("ca", "Canada"),
        ]
    }

    fn labels(options: &[ComboboxOption], indices: &[usize]) -> Vec<String> {
        indices.iter().map(|i| options[*i].label.clone()).collect()
    }

    #[test]
    fn test_option_matches() {
        let opt = ComboboxOption::new("us", "United States");
        assert!(opt.matches(""));
        assert!(opt.matches("united"));
        assert!(opt.matches("STATES"));
        // Values are not searched
        assert!(!opt.matches("us"));
        assert!(!opt.matches("canada"));
    }

    #[test]
    fn test_filter_united() {
        let options = countries();
        let mut state = ComboboxState::default();
        state.handle(ComboboxInput::Input("united".into()), &options, false);

        assert!(state.is_open);
        assert_eq!(
            labels(&options, &state.visible(&options)),
            vec!["United States", "United Kingdom"]
        );
    }

    #[test]
    fn test_empty_filter_shows_all() {
        let options = countries();
        assert_eq!(filter_options(&options, ""), vec![0, 1, 2]);
    }

    #[test]
    fn test_default_value() {
        let options = countries();
        let state = ComboboxState::with_value(Some("ca".into()), &options);
        assert_eq!(state.search_text, "Canada");
        assert_eq!(state.selected_value.as_deref(), Some("ca"));
        assert!(!state.is_open);
    }

    #[test]
    fn test_focus_open_shows_full_list() {
        let options = countries();
        let mut state = ComboboxState::with_value(Some("ca".into()), &options);
        state.handle(ComboboxInput::Focus, &options, false);

        assert!(state.is_open);
        assert!(!state.is_filtering());
        assert_eq!(state.visible(&options).len(), 3);
        assert_eq!(state.highlighted_index, 0);
    }

    #[test]
    fn test_arrow_down_twice_then_enter() {
        let options = countries();
        let mut state = ComboboxState::default();
        state.handle(ComboboxInput::Focus, &options, false);
        state.handle(ComboboxInput::Key(Key::ArrowDown), &options, false);
        state.handle(ComboboxInput::Key(Key::ArrowDown), &options, false);
        let t = state.handle(ComboboxInput::Key(Key::Enter), &options, false);

        assert_eq!(
            t.commit,
            Some(Commit {
                value: "ca".into(),
                created: false
            })
        );
        assert_eq!(state.search_text, "Canada");
        assert!(!state.is_open);
    }

    #[test]
    fn test_arrows_clamp_without_wrap() {
        let options = countries();
        let mut state = ComboboxState::default();
        state.handle(ComboboxInput::Focus, &options, false);

        state.handle(ComboboxInput::Key(Key::ArrowUp), &options, false);
        assert_eq!(state.highlighted_index, 0);

        for _ in 0..5 {
            state.handle(ComboboxInput::Key(Key::ArrowDown), &options, false);
        }
        assert_eq!(state.highlighted_index, 2);
    }

    #[test]
    fn test_home_end() {
        let options = countries();
        let mut state = ComboboxState::default();
        state.handle(ComboboxInput::Focus, &options, false);
        state.handle(ComboboxInput::Key(Key::End), &options, false);
        assert_eq!(state.highlighted_index, 2);
        state.handle(ComboboxInput::Key(Key::Home), &options, false);
        assert_eq!(state.highlighted_index, 0);
    }

    #[test]
    fn test_closed_arrow_opens() {
        let options = countries();
        let mut state = ComboboxState::default();
        let t = state.handle(ComboboxInput::Key(Key::ArrowDown), &options, false);
        assert!(state.is_open);
        assert!(t.prevent_default);
        assert_eq!(state.highlighted_index, 0);
    }

    #[test]
    fn test_closed_keys_are_noops() {
        let options = countries();
        for key in [Key::Enter, Key::Escape, Key::Tab] {
            let mut state = ComboboxState::with_value(Some("us".into()), &options);
            let before = state.clone();
            let t = state.handle(ComboboxInput::Key(key), &options, false);
            assert_eq!(state, before);
            assert_eq!(t, Transition::default());
        }
    }

    #[test]
    fn test_escape_restores_label() {
        let options = countries();
        let mut state = ComboboxState::with_value(Some("uk".into()), &options);
        state.handle(ComboboxInput::Input("can".into()), &options, false);
        let t = state.handle(ComboboxInput::Key(Key::Escape), &options, false);

        assert!(!state.is_open);
        assert_eq!(state.search_text, "United Kingdom");
        assert_eq!(state.selected_value.as_deref(), Some("uk"));
        assert!(t.commit.is_none());
        assert!(t.prevent_default);
    }

    #[test]
    fn test_tab_closes_without_preventing_default() {
        let options = countries();
        let mut state = ComboboxState::default();
        state.handle(ComboboxInput::Input("xyz".into()), &options, false);
        let t = state.handle(ComboboxInput::Key(Key::Tab), &options, false);

        assert!(!state.is_open);
        assert_eq!(state.search_text, "");
        assert!(!t.prevent_default);
    }

    #[test]
    fn test_blur_and_toggle_restore() {
        let options = countries();
        let mut state = ComboboxState::with_value(Some("us".into()), &options);

        state.handle(ComboboxInput::Input("x".into()), &options, false);
        state.handle(ComboboxInput::Blur, &options, false);
        assert_eq!(state.search_text, "United States");

        state.handle(ComboboxInput::Toggle, &options, false);
        assert!(state.is_open);
        state.handle(ComboboxInput::Input("zz".into()), &options, false);
        state.handle(ComboboxInput::Toggle, &options, false);
        assert!(!state.is_open);
        assert_eq!(state.search_text, "United States");
    }

    #[test]
    fn test_disabled_option_not_committed() {
        let options = vec![
            ComboboxOption::new("a", "Alpha").disabled(),
            ComboboxOption::new("b", "Beta"),
        ];
        let mut state = ComboboxState::default();
        state.handle(ComboboxInput::Focus, &options, false);

        let t = state.handle(ComboboxInput::Key(Key::Enter), &options, false);
        assert!(t.commit.is_none());
        assert!(state.is_open);
        assert_eq!(state.selected_value, None);

        let t = state.handle(ComboboxInput::ClickOption(0), &options, false);
        assert!(t.commit.is_none());
        assert_eq!(state.selected_value, None);

        // Arrow navigation still lands on disabled rows
        state.handle(ComboboxInput::Key(Key::ArrowDown), &options, false);
        state.handle(ComboboxInput::Key(Key::ArrowUp), &options, false);
        assert_eq!(state.highlighted_option(&options), Some(0));
    }

    #[test]
    fn test_click_hidden_option_is_noop() {
        let options = countries();
        let mut state = ComboboxState::default();
        state.handle(ComboboxInput::Input("can".into()), &options, false);

        let t = state.handle(ComboboxInput::ClickOption(0), &options, false);
        assert!(t.commit.is_none());

        let t = state.handle(ComboboxInput::ClickOption(2), &options, false);
        assert_eq!(t.commit.map(|c| c.value), Some("ca".to_string()));
    }

    #[test]
    fn test_allow_create_commits_raw_text() {
        let options = countries();
        let mut state = ComboboxState::default();
        state.handle(ComboboxInput::Input("  Narnia ".into()), &options, true);
        assert!(state.visible(&options).is_empty());

        let t = state.handle(ComboboxInput::Key(Key::Enter), &options, true);
        assert_eq!(
            t.commit,
            Some(Commit {
                value: "Narnia".into(),
                created: true
            })
        );
        assert_eq!(state.selected_value.as_deref(), Some("Narnia"));

        // A created value has no option, so its raw text is restored
        state.handle(ComboboxInput::Input("q".into()), &options, true);
        state.handle(ComboboxInput::Key(Key::Escape), &options, true);
        assert_eq!(state.search_text, "Narnia");
    }

    #[test]
    fn test_reopening_does_not_offer_committed_text() {
        let options: Vec<ComboboxOption> = Vec::new();
        let mut state = ComboboxState::with_value(Some("Narnia".into()), &options);

        state.handle(ComboboxInput::Focus, &options, true);
        assert!(state.is_open);
        assert_eq!(state.creatable_text(true), None);

        let t = state.handle(ComboboxInput::Key(Key::Enter), &options, true);
        assert!(t.commit.is_none());
        assert_eq!(state.selected_value.as_deref(), Some("Narnia"));

        state.handle(ComboboxInput::Toggle, &options, true);
        state.handle(ComboboxInput::Toggle, &options, true);
        assert_eq!(state.creatable_text(true), None);

        // Typing makes the text creatable again
        state.handle(ComboboxInput::Input("Oz".into()), &options, true);
        assert_eq!(state.creatable_text(true).as_deref(), Some("Oz"));
    }

    #[test]
    fn test_created_value_matching_option_shows_label() {
        let options = countries();
        let mut state = ComboboxState::default();
        state.handle(ComboboxInput::Input("uk".into()), &options, true);
        assert!(state.visible(&options).is_empty());

        let t = state.handle(ComboboxInput::Key(Key::Enter), &options, true);
        assert_eq!(t.commit.map(|c| c.value), Some("uk".to_string()));
        assert_eq!(state.search_text, "United Kingdom");

        state.handle(ComboboxInput::Focus, &options, true);
        state.handle(ComboboxInput::Key(Key::Escape), &options, true);
        assert_eq!(state.search_text, "United Kingdom");
    }

    #[test]
    fn test_enter_on_empty_list_without_create() {
        let options = countries();
        let mut state = ComboboxState::default();
        state.handle(ComboboxInput::Input("zzz".into()), &options, false);
        let t = state.handle(ComboboxInput::Key(Key::Enter), &options, false);
        assert!(t.commit.is_none());
        assert!(state.is_open);
    }

    #[test]
    fn test_empty_option_list() {
        let options: Vec<ComboboxOption> = Vec::new();
        let mut state = ComboboxState::default();
        state.handle(ComboboxInput::Focus, &options, false);
        state.handle(ComboboxInput::Key(Key::ArrowDown), &options, false);
        state.handle(ComboboxInput::Key(Key::End), &options, false);

        assert_eq!(state.highlighted_index, 0);
        assert_eq!(state.highlighted_option(&options), None);
        let t = state.handle(ComboboxInput::Key(Key::Enter), &options, false);
        assert!(t.commit.is_none());
    }

    #[test]
    fn test_sync_value() {
        let options = countries();
        let mut state = ComboboxState::default();
        assert!(state.sync_value(Some("uk"), &options));
        assert_eq!(state.search_text, "United Kingdom");
        assert!(!state.sync_value(Some("uk"), &options));

        state.handle(ComboboxInput::Input("ca".into()), &options, false);
        assert!(state.sync_value(Some("us"), &options));
        assert_eq!(state.search_text, "ca");
    }
}

#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use super::*;

    fn option_strategy() -> impl Strategy<Value = ComboboxOption> {
        ("[a-z]{1,4}", "[A-Za-z ]{0,8}", any::<bool>()).prop_map(|(value, label, disabled)| {
            ComboboxOption {
                value,
                label,
                disabled,
            }
        })
    }

    fn input_strategy() -> impl Strategy<Value = ComboboxInput> {
        prop_oneof![
            Just(ComboboxInput::Focus),
            Just(ComboboxInput::Blur),
            Just(ComboboxInput::Toggle),
            "[A-Za-z]{0,3}".prop_map(ComboboxInput::Input),
            (0usize..8).prop_map(ComboboxInput::ClickOption),
            prop_oneof![
                Just(Key::ArrowDown),
                Just(Key::ArrowUp),
                Just(Key::Home),
                Just(Key::End),
                Just(Key::Enter),
                Just(Key::Escape),
                Just(Key::Tab),
            ]
            .prop_map(ComboboxInput::Key),
        ]
    }

    proptest! {
        #[test]
        fn filter_is_case_insensitive_subsequence(
            options in prop::collection::vec(option_strategy(), 0..8),
            query in "[A-Za-z ]{0,3}",
        ) {
            let filtered = filter_options(&options, &query);
            let needle = query.to_lowercase();
            let expected: Vec<usize> = (0..options.len())
                .filter(|i| options[*i].label.to_lowercase().contains(&needle))
                .collect();
            prop_assert_eq!(filtered, expected);
        }

        #[test]
        fn highlight_stays_in_range(
            options in prop::collection::vec(option_strategy(), 0..6),
            inputs in prop::collection::vec(input_strategy(), 0..24),
        ) {
            let mut state = ComboboxState::default();
            for input in inputs {
                state.handle(input, &options, true);
                let count = state.visible(&options).len();
                if state.is_open && count > 0 {
                    prop_assert!(state.highlighted_index < count);
                } else {
                    prop_assert_eq!(state.highlighted_index, 0);
                }
            }
        }

        #[test]
        fn commits_never_pick_disabled_options(
            options in prop::collection::vec(option_strategy(), 0..6),
            inputs in prop::collection::vec(input_strategy(), 0..24),
        ) {
            let mut state = ComboboxState::default();
            for input in inputs {
                let before = state.selected_value.clone();
                let t = state.handle(input, &options, false);
                match t.commit {
                    Some(commit) => {
                        prop_assert!(options
                            .iter()
                            .any(|o| o.value == commit.value && !o.disabled));
                        prop_assert_eq!(state.selected_value.as_deref(), Some(commit.value.as_str()));
                    }
                    None => prop_assert_eq!(state.selected_value.clone(), before),
                }
            }
        }

        #[test]
        fn escape_restores_committed_label(
            options in prop::collection::vec(option_strategy(), 1..6),
            pick in 0usize..6,
            typed in "[a-z]{0,4}",
        ) {
            let value = options[pick % options.len()].value.clone();
            let mut state = ComboboxState::with_value(Some(value.clone()), &options);
            state.handle(ComboboxInput::Input(typed), &options, false);
            state.handle(ComboboxInput::Key(Key::Escape), &options, false);

            prop_assert!(!state.is_open);
            prop_assert_eq!(state.search_text, label_for(&options, Some(&value)));
            prop_assert_eq!(state.selected_value, Some(value));
        }
    }
}
