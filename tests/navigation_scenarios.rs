use std::cell::Cell;
use std::rc::Rc;

use statnav::core::announce::{
    AnnouncementSink, DEFAULT_UNAVAILABLE_MESSAGE, GroupNames, Presenter, TemplateReader,
    Transcript,
};
use statnav::core::engine::{EnabledGate, Motion, NavigationEngine};
use statnav::core::entry::Entry;
use statnav::core::groups::GroupBounds;
use statnav::core::screens::{BestiaryGroup, Navigator, StatusGroup, build_engine};
use statnav::core::sheet::parse_sheet;

// ============================================================================
// Helper Functions
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Group {
    Status,
    Options,
    Misc,
}

fn names() -> GroupNames<Group> {
    GroupNames::default()
        .with(Group::Status, "Status")
        .with(Group::Options, "Options")
}

/// `[("Level","12",Status), ("HP","30/30",Status), ("Gil","100",Options)]`
fn scenario_engine() -> NavigationEngine<Group> {
    let mut engine = NavigationEngine::new(Presenter::new(names()), EnabledGate::always());
    engine.initialize(vec![
        Entry::new("Level", "12", Group::Status),
        Entry::new("HP", "30/30", Group::Status),
        Entry::new("Gil", "100", Group::Options),
    ]);
    engine
}

fn engine_of_len(n: usize) -> NavigationEngine<Group> {
    let mut engine = NavigationEngine::new(Presenter::new(names()), EnabledGate::always());
    engine.initialize((0..n).map(|i| {
        let group = if i % 3 == 0 { Group::Status } else { Group::Options };
        Entry::new(format!("Stat {i}"), i.to_string(), group)
    }));
    engine
}

/// Counts announcements without keeping them.
#[derive(Default)]
struct CountingSink {
    count: usize,
}

impl AnnouncementSink for CountingSink {
    fn announce(&mut self, _text: &str, _interrupt: bool) {
        self.count += 1;
    }
}

// ============================================================================
// Wraparound
// ============================================================================

#[test]
fn test_next_n_times_returns_to_start() {
    for n in 1..=7 {
        let mut engine = engine_of_len(n);
        let mut sink = CountingSink::default();
        for start in 0..n {
            engine.force_cursor(start);
            for _ in 0..n {
                engine.next(&mut sink);
            }
            assert_eq!(engine.cursor(), Some(start), "n={n} start={start}");
        }
    }
}

#[test]
fn test_previous_n_times_returns_to_start() {
    for n in 1..=7 {
        let mut engine = engine_of_len(n);
        let mut sink = CountingSink::default();
        for start in 0..n {
            engine.force_cursor(start);
            for _ in 0..n {
                engine.previous(&mut sink);
            }
            assert_eq!(engine.cursor(), Some(start), "n={n} start={start}");
        }
    }
}

#[test]
fn test_next_and_previous_are_inverse() {
    for n in 2..=6 {
        let mut engine = engine_of_len(n);
        let mut sink = CountingSink::default();
        for start in 0..n {
            engine.force_cursor(start);
            engine.next(&mut sink);
            engine.previous(&mut sink);
            assert_eq!(engine.cursor(), Some(start));

            engine.previous(&mut sink);
            engine.next(&mut sink);
            assert_eq!(engine.cursor(), Some(start));
        }
    }
}

#[test]
fn test_each_motion_reads_exactly_once() {
    let mut engine = scenario_engine();
    let mut sink = CountingSink::default();
    for (i, motion) in [
        Motion::Next,
        Motion::Previous,
        Motion::NextGroup,
        Motion::PreviousGroup,
        Motion::Top,
        Motion::Bottom,
    ]
    .into_iter()
    .enumerate()
    {
        assert!(engine.apply(motion, &mut sink));
        assert_eq!(sink.count, i + 1);
    }
}

// ============================================================================
// Group Bounds
// ============================================================================

#[test]
fn test_group_bounds_examples() {
    let groups = [
        Group::Status,
        Group::Status,
        Group::Options,
        Group::Options,
        Group::Options,
        Group::Misc,
    ];
    let entries: Vec<_> = groups.iter().map(|g| Entry::new("x", "1", *g)).collect();
    assert_eq!(GroupBounds::build(&entries).as_slice(), &[0, 2, 5]);

    let entries = vec![
        Entry::new("a", "1", Group::Status),
        Entry::new("b", "2", Group::Options),
        Entry::new("c", "3", Group::Status),
    ];
    assert_eq!(GroupBounds::build(&entries).as_slice(), &[0, 1, 2]);
}

#[test]
fn test_next_group_from_last_run_wraps_to_first() {
    let mut engine = scenario_engine();
    let mut sink = Transcript::default();
    engine.force_cursor(2);
    engine.jump_to_next_group(&mut sink);
    assert_eq!(engine.cursor(), Some(0));
}

#[test]
fn test_previous_group_from_first_run_wraps_to_last() {
    let mut engine = scenario_engine();
    let mut sink = Transcript::default();
    engine.jump_to_previous_group(&mut sink);
    assert_eq!(engine.cursor(), Some(2));
}

#[test]
fn test_unmapped_group_uses_fallback_name() {
    let mut engine = NavigationEngine::new(Presenter::new(names()), EnabledGate::always());
    engine.initialize(vec![
        Entry::new("Level", "12", Group::Status),
        Entry::new("Steps", "9001", Group::Misc),
    ]);
    let mut sink = Transcript::default();
    engine.jump_to_next_group(&mut sink);
    assert_eq!(sink.last().unwrap().text, "Other. Steps: 9001");
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_group_jump_scenario() {
    let mut engine = scenario_engine();
    let mut sink = Transcript::default();
    assert_eq!(engine.cursor(), Some(0));

    engine.jump_to_next_group(&mut sink);
    assert_eq!(engine.cursor(), Some(2));
    assert_eq!(sink.last().unwrap().text, "Options. Gil: 100");

    engine.jump_to_next_group(&mut sink);
    assert_eq!(engine.cursor(), Some(0));
    assert_eq!(sink.last().unwrap().text, "Status. Level: 12");
}

#[test]
fn test_bottom_then_next_wraps_with_plain_read() {
    let mut engine = scenario_engine();
    let mut sink = Transcript::default();

    engine.jump_to_bottom(&mut sink);
    assert_eq!(engine.cursor(), Some(2));

    engine.next(&mut sink);
    assert_eq!(engine.cursor(), Some(0));
    assert_eq!(sink.last().unwrap().text, "Level: 12");
}

#[test]
fn test_is_active_needs_buffer_and_flag() {
    let flag = Rc::new(Cell::new(true));
    let mut engine = NavigationEngine::new(Presenter::new(names()), EnabledGate::from_flag(flag.clone()));
    assert!(!engine.is_active());

    flag.set(false);
    assert!(!engine.is_active());

    engine.initialize(vec![Entry::new("Level", "12", Group::Status)]);
    assert!(!engine.is_active());

    flag.set(true);
    assert!(engine.is_active());

    engine.initialize(Vec::new());
    assert!(!engine.is_active());
}

#[test]
fn test_reset_then_traversal_is_noop() {
    let mut engine = scenario_engine();
    engine.reset();
    let mut sink = Transcript::default();

    assert!(!engine.next(&mut sink));
    assert!(!engine.previous(&mut sink));
    assert!(!engine.jump_to_next_group(&mut sink));
    assert!(!engine.jump_to_previous_group(&mut sink));
    assert!(!engine.jump_to_top(&mut sink));
    assert!(!engine.jump_to_bottom(&mut sink));
    assert!(sink.is_empty());
    assert_eq!(engine.cursor(), None);
}

#[test]
fn test_read_current_on_fresh_engine_reports_unavailable() {
    let mut engine: NavigationEngine<Group> =
        NavigationEngine::new(Presenter::new(names()), EnabledGate::always());
    let mut sink = Transcript::default();
    engine.read_current(&mut sink, true);

    assert_eq!(sink.texts(), vec![DEFAULT_UNAVAILABLE_MESSAGE]);
    assert_eq!(engine.cursor(), None);
    assert!(engine.bounds().is_none());
    assert!(engine.entries().is_empty());
}

#[test]
fn test_custom_template_reader() {
    let presenter = Presenter::new(names()).with_reader(TemplateReader::parse("{label} = {value}").unwrap());
    let mut engine = NavigationEngine::new(presenter, EnabledGate::always());
    engine.initialize(vec![
        Entry::new("Level", "12", Group::Status),
        Entry::new("Gil", "100", Group::Options),
    ]);
    let mut sink = Transcript::default();
    engine.jump_to_next_group(&mut sink);
    assert_eq!(sink.last().unwrap().text, "Options. Gil = 100");
}

// ============================================================================
// Screens
// ============================================================================

#[test]
fn test_screens_share_one_engine_type() {
    let config = statnav::core::config::resolve(&Default::default(), Some(statnav::Screen::Status), None);
    let sheet = parse_sheet(
        r#"
[[status]]
label = "Level"
value = 3
group = "status"

[[status]]
label = "Attack"
value = 9
group = "combat"

[[bestiary]]
label = "Name"
value = "Slime"
group = "overview"

[[bestiary]]
label = "Coin"
value = 2
group = "drops"
"#,
    )
    .unwrap();

    let mut status: Box<dyn Navigator> = Box::new(build_engine::<StatusGroup>(
        &config,
        &config.status_names,
        EnabledGate::always(),
    ));
    let mut bestiary: Box<dyn Navigator> = Box::new(build_engine::<BestiaryGroup>(
        &config,
        &config.bestiary_names,
        EnabledGate::always(),
    ));
    status.load(&sheet);
    bestiary.load(&sheet);

    let mut sink = Transcript::default();
    status.apply(Motion::NextGroup, &mut sink);
    bestiary.apply(Motion::PreviousGroup, &mut sink);
    assert_eq!(sink.texts(), vec!["Combat. Attack: 9", "Drops. Coin: 2"]);
}
