use beancounter_engine::bean::Bean;
use beancounter_engine::board::BeanCounter;
use beancounter_engine::rng::{ScriptedRandom, SeededRandom};

const SLOTS: usize = 5;

// Gaussian samples -1.0 and 2.0 give skill levels 1 and 4 on a 5-slot board.
fn skilled_beans() -> Vec<Bean> {
    [-1.0, 2.0, 2.0]
        .into_iter()
        .map(|g| Bean::skill(SLOTS, Box::new(ScriptedRandom::gaussian(g))))
        .collect()
}

fn drained() -> BeanCounter {
    let mut board = BeanCounter::new(SLOTS);
    board.reset(skilled_beans());
    while board.step().expect("step ok") {}
    board
}

#[test]
fn skilled_beans_land_on_their_bias() {
    let board = drained();
    assert_eq!(board.remaining_bean_count(), 0);
    assert_eq!(board.in_flight_count(), 0);
    assert_eq!(board.slot_counts(), vec![0, 1, 0, 0, 2]);
}

#[test]
fn seven_steps_are_enough_for_three_beans() {
    let mut board = BeanCounter::new(SLOTS);
    board.reset(skilled_beans());
    for _ in 0..7 {
        assert_eq!(board.step(), Ok(true));
    }
    assert_eq!(board.slot_counts(), vec![0, 1, 0, 0, 2]);
    assert_eq!(board.step(), Ok(false));
}

#[test]
fn average_slot_index() {
    let board = drained();
    assert_eq!(board.average_slot_index(), Ok(3.0));
}

#[test]
fn lower_half_removes_from_the_top() {
    let mut board = drained();
    board.lower_half();
    assert_eq!(board.slot_counts(), vec![0, 1, 0, 0, 1]);
}

#[test]
fn upper_half_removes_from_the_bottom() {
    let mut board = drained();
    board.upper_half();
    assert_eq!(board.slot_counts(), vec![0, 0, 0, 0, 2]);
}

#[test]
fn trimming_even_population_halves_it() {
    let beans = [-1.0, -1.0, 0.0, 2.0]
        .into_iter()
        .map(|g| Bean::skill(SLOTS, Box::new(ScriptedRandom::gaussian(g))))
        .collect();
    let mut board = BeanCounter::new(SLOTS);
    board.reset(beans);
    board.run_to_completion().unwrap();
    assert_eq!(board.slot_counts(), vec![0, 2, 1, 0, 1]);

    board.upper_half();
    assert_eq!(board.slot_counts(), vec![0, 0, 1, 0, 1]);
    board.lower_half();
    assert_eq!(board.slot_counts(), vec![0, 0, 1, 0, 0]);
}

#[test]
fn trimming_empty_slots_is_a_no_op() {
    let mut board = BeanCounter::new(SLOTS);
    board.upper_half();
    board.lower_half();
    assert_eq!(board.in_slots_count(), 0);
}

#[test]
fn repeat_replays_the_same_population() {
    let mut board = drained();
    board.repeat();
    assert_eq!(board.remaining_bean_count(), 2);
    assert_eq!(board.in_flight_x(0), Some(0));
    assert_eq!(board.in_slots_count(), 0);
    while board.step().unwrap() {}
    assert_eq!(board.slot_counts(), vec![0, 1, 0, 0, 2]);
}

#[test]
fn repeat_after_trim_keeps_only_survivors() {
    let mut board = drained();
    board.upper_half();
    board.repeat();
    board.run_to_completion().unwrap();
    assert_eq!(board.slot_counts(), vec![0, 0, 0, 0, 2]);
}

#[test]
fn repeat_mid_run_gathers_every_bean() {
    let mut board = BeanCounter::new(SLOTS);
    board.reset(skilled_beans());
    board.step().unwrap();
    board.step().unwrap();
    board.repeat();
    assert_eq!(board.total_beans(), 3);
    board.run_to_completion().unwrap();
    assert_eq!(board.slot_counts(), vec![0, 1, 0, 0, 2]);
}

#[test]
fn skill_bean_never_consults_binary_source() {
    let mut bean = Bean::skill(SLOTS, Box::new(SeededRandom::new_with_seed(11)));
    let bias = bean.bias().unwrap();
    for _ in 0..SLOTS - 1 {
        bean.advance().unwrap();
    }
    assert_eq!((bean.x(), bean.y()), (bias, SLOTS - 1));
}

#[test]
fn summary_reports_counts_and_average() {
    let s = drained().summary();
    assert_eq!(s.counts, vec![0, 1, 0, 0, 2]);
    assert_eq!(s.total, 3);
    assert_eq!(s.average, Some(3.0));
}
