use super::*;
use crate::animation::engine::EngineConfig;
use crate::broadcast::sink::InMemorySink;
use crate::stage::table::{STAGE1, StageTable};
use crate::state::sliced::SlicedCubesState;

fn driver(start: f64) -> Driver {
    let engine = Engine::new(StageTable::standard(), EngineConfig::default()).unwrap();
    Driver::new(engine, Clock::new(start).unwrap())
}

#[test]
fn tick_numbers_updates() {
    let mut d = driver(0.0);
    let first = d.tick().unwrap();
    assert_eq!(first.seq, 0);
    assert_eq!(first.state, SlicedCubesState::uniform(STAGE1));
    d.clock_mut().advance(25.0).unwrap();
    let second = d.tick().unwrap();
    assert_eq!(second.seq, 1);
    assert_eq!(second.t, 25.0);
    assert_eq!(d.next_seq(), 2);
}

#[test]
fn run_streams_updates_in_clock_order() {
    let mut d = driver(5.0);
    let mut sink = InMemorySink::new();
    let stats = d.run(4, 2.5, &mut sink).unwrap();
    assert_eq!(stats.ticks, 4);
    assert_eq!(stats.first_t, 5.0);
    assert_eq!(stats.last_t, 12.5);
    assert_eq!(sink.channel(), Some(SLICED_CUBES_STATE_NAME));
    assert!(sink.ended());
    let ts: Vec<f64> = sink.updates().iter().map(|u| u.t).collect();
    assert_eq!(ts, vec![5.0, 7.5, 10.0, 12.5]);
    assert!(sink.updates().iter().all(|u| u.is_intact()));
}

#[test]
fn frozen_clock_repeats_identical_state() {
    let mut d = driver(33.3);
    d.clock_mut().freeze();
    let mut sink = InMemorySink::new();
    d.run(3, 1.0, &mut sink).unwrap();
    let u = sink.updates();
    assert_eq!(u[0].state, u[2].state);
    assert_eq!(u[0].fingerprint, u[2].fingerprint);
    assert_ne!(u[0].seq, u[2].seq);
}

#[test]
fn bad_step_is_rejected_before_anything_is_pushed() {
    let mut d = driver(0.0);
    let mut sink = InMemorySink::new();
    assert!(d.run(3, -1.0, &mut sink).is_err());
    assert!(sink.channel().is_none());
    assert!(sink.updates().is_empty());
}
