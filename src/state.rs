//! Interaction state for the portfolio page.
//!
//! [`PortfolioState`] is owned by the page root and only changes through its
//! methods; child components receive callbacks that forward to them.

use std::fmt;

use crate::catalog::{Project, ProjectKind, PROJECTS};

/// Project-type filter for the projects grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProjectFilter {
    #[default]
    All,
    Kind(ProjectKind),
}

impl ProjectFilter {
    /// Every selectable filter, in button order.
    pub const ALL: [ProjectFilter; 3] = [
        Self::All,
        Self::Kind(ProjectKind::Django),
        Self::Kind(ProjectKind::Mern),
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Kind(kind) => kind.label(),
        }
    }

    pub fn matches(self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Kind(kind) => project.kind == kind,
        }
    }
}

/// Catalog entries admitted by `filter`, in catalog order.
pub fn filter_projects(
    catalog: &[Project],
    filter: ProjectFilter,
) -> impl Iterator<Item = &Project> + '_ {
    catalog.iter().filter(move |p| filter.matches(p))
}

/// Background theme of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    Dark,
    #[default]
    Blue,
    Light,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Self::Dark, Self::Blue, Self::Light];

    /// The theme after this one when cycling with the navbar toggle.
    pub fn next(self) -> Self {
        match self {
            Self::Dark => Self::Blue,
            Self::Blue => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn gradient_class(self) -> &'static str {
        match self {
            Self::Dark => "from-slate-900 via-indigo-900 to-slate-800",
            Self::Blue => "from-blue-950 via-indigo-900 to-slate-900",
            Self::Light => "from-white via-gray-100 to-gray-50",
        }
    }

    pub fn text_class(self) -> &'static str {
        match self {
            Self::Light => "text-slate-900",
            Self::Dark | Self::Blue => "text-slate-100",
        }
    }

    pub fn is_light(self) -> bool {
        self == Self::Light
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dark => f.write_str("dark"),
            Self::Blue => f.write_str("blue"),
            Self::Light => f.write_str("light"),
        }
    }
}

/// Certificate viewer: closed, or open on a single image.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open(String),
}

impl ModalState {
    pub fn image(&self) -> Option<&str> {
        match self {
            Self::Closed => None,
            Self::Open(src) => Some(src),
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PortfolioState {
    filter: ProjectFilter,
    theme: Theme,
    modal: ModalState,
    avatar_failed: bool,
}

impl PortfolioState {
    pub fn filter(&self) -> ProjectFilter {
        self.filter
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    pub fn modal_image(&self) -> Option<String> {
        self.modal.image().map(str::to_owned)
    }

    pub fn avatar_failed(&self) -> bool {
        self.avatar_failed
    }

    pub fn select_filter(&mut self, filter: ProjectFilter) {
        self.filter = filter;
    }

    pub fn select_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Opens the viewer on `src`, replacing any image already shown.
    pub fn open_modal(&mut self, src: impl Into<String>) {
        self.modal = ModalState::Open(src.into());
    }

    pub fn close_modal(&mut self) {
        self.modal = ModalState::Closed;
    }

    /// Latches the avatar into its initials fallback for the rest of the
    /// session. There is no way back.
    pub fn mark_avatar_failed(&mut self) {
        self.avatar_failed = true;
    }

    pub fn visible_projects(&self) -> Vec<&'static Project> {
        filter_projects(&PROJECTS, self.filter).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn titles(state: &PortfolioState) -> Vec<&'static str> {
        state.visible_projects().iter().map(|p| p.title).collect()
    }

    #[test]
    fn initial_state() {
        let state = PortfolioState::default();
        assert_eq!(state.filter(), ProjectFilter::All);
        assert_eq!(state.theme(), Theme::Blue);
        assert_eq!(state.modal(), &ModalState::Closed);
        assert!(!state.avatar_failed());
    }

    #[test]
    fn all_filter_returns_whole_catalog_in_order() {
        let state = PortfolioState::default();
        let ids: Vec<u32> = state.visible_projects().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn django_filter_titles() {
        let mut state = PortfolioState::default();
        state.select_filter(ProjectFilter::Kind(ProjectKind::Django));
        assert_eq!(titles(&state), vec!["Recipe Planner", "CRUD Project", "Code Editor"]);
    }

    #[test]
    fn mern_filter_titles() {
        let mut state = PortfolioState::default();
        state.select_filter(ProjectFilter::Kind(ProjectKind::Mern));
        assert_eq!(
            titles(&state),
            vec!["Password Manager", "Spotify Clone", "Netflix Clone"]
        );
    }

    #[test]
    fn every_filter_is_an_ordered_subset_of_the_catalog() {
        for filter in ProjectFilter::ALL {
            let expected: Vec<u32> = PROJECTS
                .iter()
                .filter(|p| match filter {
                    ProjectFilter::All => true,
                    ProjectFilter::Kind(kind) => p.kind == kind,
                })
                .map(|p| p.id)
                .collect();
            let actual: Vec<u32> = filter_projects(&PROJECTS, filter).map(|p| p.id).collect();
            assert_eq!(actual, expected, "filter {}", filter.label());
        }
    }

    #[test]
    fn filter_over_empty_catalog_is_empty() {
        let filtered = filter_projects(&[], ProjectFilter::Kind(ProjectKind::Django));
        assert_eq!(filtered.count(), 0);
    }

    #[test]
    fn filter_labels() {
        let labels: Vec<&str> = ProjectFilter::ALL.iter().map(|f| f.label()).collect();
        assert_eq!(labels, vec!["All", "Django", "MERN"]);
    }

    #[test]
    fn theme_cycles_through_every_value() {
        assert_eq!(Theme::Dark.next(), Theme::Blue);
        assert_eq!(Theme::Blue.next(), Theme::Light);
        assert_eq!(Theme::Light.next(), Theme::Dark);
        for theme in Theme::ALL {
            assert_eq!(theme.next().next().next(), theme);
        }
    }

    #[test]
    fn only_light_theme_uses_dark_text() {
        assert_eq!(Theme::Light.text_class(), "text-slate-900");
        assert_eq!(Theme::Dark.text_class(), "text-slate-100");
        assert_eq!(Theme::Blue.text_class(), "text-slate-100");
    }

    #[test]
    fn modal_opens_and_closes() {
        let mut state = PortfolioState::default();
        state.open_modal("/images/cert1.png");
        assert!(state.modal().is_open());
        assert_eq!(state.modal_image().as_deref(), Some("/images/cert1.png"));

        state.close_modal();
        assert_eq!(state.modal(), &ModalState::Closed);
        assert_eq!(state.modal_image(), None);
    }

    #[test]
    fn opening_replaces_current_image() {
        let mut state = PortfolioState::default();
        state.open_modal("/images/cert1.png");
        state.open_modal("/images/cert3.jpg");
        assert_eq!(state.modal().image(), Some("/images/cert3.jpg"));
    }

    #[test]
    fn closing_twice_stays_closed() {
        let mut state = PortfolioState::default();
        state.close_modal();
        state.close_modal();
        assert!(!state.modal().is_open());
    }

    #[test]
    fn avatar_failure_is_permanent() {
        let mut state = PortfolioState::default();
        state.mark_avatar_failed();
        state.select_filter(ProjectFilter::Kind(ProjectKind::Mern));
        state.select_theme(Theme::Light);
        state.open_modal("/images/cert2.png");
        state.close_modal();
        assert!(state.avatar_failed());

        state.mark_avatar_failed();
        assert!(state.avatar_failed());
    }

    #[test]
    fn mutations_leave_other_fields_alone() {
        let mut state = PortfolioState::default();
        state.select_theme(Theme::Dark);
        assert_eq!(state.filter(), ProjectFilter::All);
        state.select_filter(ProjectFilter::Kind(ProjectKind::Django));
        assert_eq!(state.theme(), Theme::Dark);
        assert!(!state.modal().is_open());
    }
}
