use splitflap_core::{
    ClockEvent, Command, Config, DigitReading, DigitSlot, Engine, Inputs, Slot, SlotPlan,
};

const DT: f32 = 0.016;

fn approx(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

fn reading(s: &str) -> DigitReading {
    DigitReading::parse(s).expect("test reading")
}

fn seeded_engine(s: &str) -> Engine {
    let mut eng = Engine::new(Config::default());
    eng.seed(reading(s));
    eng
}

/// Step until the given digit slot commits, returning observed angles.
fn run_flip_to_commit(eng: &mut Engine, slot: DigitSlot) -> Vec<f32> {
    let mut angles = Vec::new();
    for _ in 0..1000 {
        let finished = {
            let out = eng.update(DT, Inputs::default());
            out.events
                .iter()
                .any(|e| matches!(e, ClockEvent::FlipFinished { slot: s, .. } if *s == slot))
        };
        if finished {
            return angles;
        }
        angles.push(eng.digit(slot).angle());
    }
    panic!("flip on {slot:?} did not finish within 1000 ticks");
}

/// it should stay silent when the reading matches the seeded face
#[test]
fn same_reading_is_silent() {
    let mut eng = seeded_engine("123456");
    let out = eng.update(DT, Inputs::with_reading(reading("123456")));
    assert!(out.is_empty());
    assert!(!eng.is_animating());
}

/// it should flip exactly the changed position and commit its value
#[test]
fn seconds_advance_flips_one_digit() {
    let mut eng = seeded_engine("123456");
    let slot = DigitSlot(5);

    let out = eng.update(DT, Inputs::with_reading(reading("123457")));
    assert_eq!(
        out.events,
        vec![ClockEvent::FlipStarted {
            slot,
            from: 6,
            to: 7
        }]
    );
    assert_eq!(out.changes.len(), 1, "only the flipping tile repaints");
    assert!(eng.is_animating());

    let angles = run_flip_to_commit(&mut eng, slot);
    let mut prev = 0.0;
    for &a in &angles {
        assert!(a >= prev, "angle regressed: {a} < {prev}");
        prev = a;
    }
    assert_eq!(eng.digit(slot).current(), 7);
    assert!(!eng.is_animating());
}

/// it should flip every differing position independently on a minute wrap
#[test]
fn minute_wrap_flips_positions_independently() {
    let mut eng = seeded_engine("125959");
    let out = eng.update(DT, Inputs::with_reading(reading("130000")));
    let started: Vec<_> = out
        .events
        .iter()
        .filter(|e| matches!(e, ClockEvent::FlipStarted { .. }))
        .collect();
    // slots 1-5 differ; slot 0 still shows 1
    assert_eq!(started.len(), 5);

    for _ in 0..1000 {
        if !eng.is_animating() {
            break;
        }
        eng.update(DT, Inputs::default());
    }
    let face: Vec<u8> = (0..6).map(|i| eng.digit(DigitSlot(i)).current()).collect();
    assert_eq!(face, vec![1, 3, 0, 0, 0, 0]);
}

/// it should coalesce two readings inside one animation window onto the last target
#[test]
fn rapid_readings_coalesce() {
    let mut eng = seeded_engine("000005");
    let slot = DigitSlot(5);

    eng.update(DT, Inputs::with_reading(reading("000006")));
    eng.update(DT, Inputs::default());
    // Second change before the first flip completed: retarget only.
    let out = eng.update(DT, Inputs::with_reading(reading("000007")));
    assert!(
        !out.events
            .iter()
            .any(|e| matches!(e, ClockEvent::FlipStarted { .. })),
        "mid-flight retarget must not start a second animation"
    );

    run_flip_to_commit(&mut eng, slot);
    assert_eq!(eng.digit(slot).current(), 7, "6 was legitimately skipped");
}

/// it should emit FlipFinished exactly once per flip
#[test]
fn finished_fires_once() {
    let mut eng = seeded_engine("000000");
    eng.update(DT, Inputs::with_reading(reading("000001")));
    let mut finished = 0;
    for _ in 0..1000 {
        let out = eng.update(DT, Inputs::default());
        finished += out
            .events
            .iter()
            .filter(|e| matches!(e, ClockEvent::FlipFinished { .. }))
            .count();
        if !eng.is_animating() {
            break;
        }
    }
    assert_eq!(finished, 1);
    // Ticks after completion emit nothing for the settled digit.
    let out = eng.update(DT, Inputs::default());
    assert!(out.is_empty());
}

/// it should clamp scale commands and repaint the whole face
#[test]
fn scale_command_clamps_and_repaints() {
    let mut eng = seeded_engine("123456");
    let out = eng.update(
        DT,
        Inputs {
            commands: vec![Command::SetScale { scale: 10.0 }],
            reading: None,
        },
    );
    assert!(out
        .events
        .iter()
        .any(|e| matches!(e, ClockEvent::ScaleChanged { scale } if *scale == 3.0)));
    assert_eq!(out.changes.len(), 8, "every slot is stale at the new size");

    let digit_plan = out
        .changes
        .iter()
        .find_map(|c| match (&c.slot, &c.plan) {
            (Slot::Digit(_), SlotPlan::Digit(p)) => Some(*p),
            _ => None,
        })
        .expect("digit plan present");
    approx(digit_plan.card.w, 180.0 * 3.0 - 4.0 * 3.0, 1e-4);
    assert_eq!(eng.scale(), 3.0);
}

/// it should keep an in-flight flip's progress across a scale change
#[test]
fn scale_change_does_not_interrupt_flips() {
    let mut eng = seeded_engine("000000");
    let slot = DigitSlot(5);
    eng.update(DT, Inputs::with_reading(reading("000001")));
    for _ in 0..5 {
        eng.update(DT, Inputs::default());
    }
    let before = eng.digit(slot).angle();
    assert!(before > 0.0);

    let out = eng.update(
        DT,
        Inputs {
            commands: vec![Command::SetScale { scale: 2.0 }],
            reading: None,
        },
    );
    assert!(out.events.contains(&ClockEvent::ScaleChanged { scale: 2.0 }));
    assert!(
        eng.digit(slot).angle() > before,
        "progress continued through the scale change"
    );
    assert!(eng.is_animating());
}

/// it should toggle the colons on their own cadence
#[test]
fn colons_blink_on_interval() {
    let mut eng = seeded_engine("123456");
    // Half a second in one tick: both colons toggle off.
    let out = eng.update(0.5, Inputs::default());
    let toggles: Vec<_> = out
        .events
        .iter()
        .filter(|e| matches!(e, ClockEvent::BlinkToggled { on: false, .. }))
        .collect();
    assert_eq!(toggles.len(), 2);
    assert_eq!(out.changes.len(), 2);

    // A full period in one tick nets out: no visible change.
    let out = eng.update(1.0, Inputs::default());
    assert!(out.is_empty());
}

/// it should produce a full frame matching the seeded idle face
#[test]
fn frame_matches_seeded_face() {
    let eng = seeded_engine("235907");
    let frame = eng.frame();
    assert_eq!(frame.len(), 8);

    let glyphs: Vec<u8> = frame
        .iter()
        .filter_map(|c| match &c.plan {
            SlotPlan::Digit(p) => {
                assert_eq!(p.top.glyph, p.bottom.glyph);
                assert_eq!(p.top.v_scale, 1.0);
                assert_eq!(p.bottom.v_scale, 1.0);
                Some(p.top.glyph)
            }
            SlotPlan::Colon(p) => {
                assert!(p.on);
                None
            }
        })
        .collect();
    assert_eq!(glyphs, vec![2, 3, 5, 9, 0, 7]);
}

/// it should round-trip Config, Inputs, and Outputs through serde
#[test]
fn contracts_serde_roundtrip() {
    let cfg = Config::default();
    let s = serde_json::to_string(&cfg).unwrap();
    let cfg2: Config = serde_json::from_str(&s).unwrap();
    assert_eq!(cfg, cfg2);

    let inputs = Inputs {
        commands: vec![Command::SetScale { scale: 1.5 }],
        reading: Some(reading("010203")),
    };
    let s = serde_json::to_string(&inputs).unwrap();
    let inputs2: Inputs = serde_json::from_str(&s).unwrap();
    assert_eq!(inputs, inputs2);

    let mut eng = seeded_engine("000000");
    let out = eng
        .update(DT, Inputs::with_reading(reading("000001")))
        .clone();
    assert!(!out.is_empty());
    let s = serde_json::to_string(&out).unwrap();
    let out2: splitflap_core::Outputs = serde_json::from_str(&s).unwrap();
    assert_eq!(out, out2);
}

/// it should produce identical outputs for the same dt sequence (determinism)
#[test]
fn determinism_same_sequence_same_outputs() {
    let mut e1 = seeded_engine("095959");
    let mut e2 = seeded_engine("095959");
    let seq = [DT, DT, 0.032, 0.0, 0.1, DT];
    let next = reading("100000");
    for (i, dt) in seq.into_iter().enumerate() {
        let inputs = if i == 1 {
            Inputs::with_reading(next)
        } else {
            Inputs::default()
        };
        let o1 = serde_json::to_string(e1.update(dt, inputs.clone())).unwrap();
        let o2 = serde_json::to_string(e2.update(dt, inputs)).unwrap();
        assert_eq!(o1, o2);
    }
}
