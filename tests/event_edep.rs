use proptest::prelude::*;
use sc8data::error::{Error, Result};
use sc8data::{EventEdep, ParticleRecord, N_SBAR, N_TRAY};
use std::thread;

/// Example scenario: two writes, the other 42 slots stay zero.
#[test]
fn two_writes_leave_other_slots_zero() -> Result<()> {
    let mut e = EventEdep::new();
    e.add_sbar(7, 5.0)?;
    e.add_tray(1, 2.5)?;

    assert_eq!(e.sbar[7], 5.0);
    assert_eq!(e.tray[1], 2.5);
    let nonzero = e
        .sbar
        .iter()
        .chain(e.tray.iter())
        .filter(|&&v| v != 0.0)
        .count();
    assert_eq!(nonzero, 2);
    Ok(())
}

#[test]
fn lengths_are_fixed() {
    let e = EventEdep::default();
    assert_eq!(e.sbar.len(), N_SBAR);
    assert_eq!(e.tray.len(), N_TRAY);
    assert_eq!((N_SBAR, N_TRAY), (40, 4));
}

#[test]
fn past_the_end_access_fails() {
    let mut e = EventEdep::default();
    assert!(e.sbar.get(40).is_none());
    assert!(e.tray.get(4).is_none());
    assert!(matches!(
        e.add_sbar(40, 1.0),
        Err(Error::OutOfBounds { index: 40, len: 40, .. })
    ));
    assert!(matches!(
        e.add_tray(4, 1.0),
        Err(Error::OutOfBounds { index: 4, len: 4, .. })
    ));
    assert!(e.is_empty());
}

/// Serialized form uses the detector's SBAR/TRAY names and plain lists.
#[cfg(feature = "serde")]
#[test]
fn json_round_trip_uses_detector_names() -> std::result::Result<(), serde_json::Error> {
    let mut e = EventEdep::new();
    e.sbar[0] = 1.0;
    e.sbar[39] = 39.5;
    e.tray[3] = 0.25;

    let value = serde_json::to_value(e)?;
    assert_eq!(value["SBAR"].as_array().map(Vec::len), Some(40));
    assert_eq!(value["TRAY"].as_array().map(Vec::len), Some(4));
    assert_eq!(value["SBAR"][39], 39.5);

    let back: EventEdep = serde_json::from_value(value)?;
    assert_eq!(back, e);
    Ok(())
}

#[cfg(feature = "serde")]
#[test]
fn json_with_wrong_length_is_rejected() {
    let short = format!(r#"{{"SBAR":{:?},"TRAY":[0.0,0.0,0.0,0.0]}}"#, vec![0.0; 39]);
    assert!(serde_json::from_str::<EventEdep>(&short).is_err());

    let long = format!(r#"{{"SBAR":{:?},"TRAY":[0.0,0.0,0.0,0.0]}}"#, vec![0.0; 41]);
    assert!(serde_json::from_str::<EventEdep>(&long).is_err());

    let bad_tray = format!(r#"{{"SBAR":{:?},"TRAY":[0.0,0.0,0.0]}}"#, vec![0.0; 40]);
    assert!(serde_json::from_str::<EventEdep>(&bad_tray).is_err());
}

/// One record per worker, reduced with `+=` at the end.
#[test]
fn per_worker_partials_reduce_to_serial_sum() -> Result<()> {
    let steps: Vec<(usize, ParticleRecord)> = (0..400)
        .map(|i| {
            let rec = ParticleRecord {
                trackid: i as i32,
                edep: 0.5,
                steplength: 0.1,
                ..Default::default()
            };
            (i % N_SBAR, rec)
        })
        .collect();

    let mut serial = EventEdep::new();
    for (bar, rec) in &steps {
        serial.add_sbar(*bar, rec.edep)?;
        serial.add_tray(bar % N_TRAY, rec.steplength)?;
    }

    let partials = thread::scope(|s| {
        let handles: Vec<_> = steps
            .chunks(100)
            .map(|chunk| {
                s.spawn(move || -> Result<EventEdep> {
                    let mut part = EventEdep::new();
                    for (bar, rec) in chunk {
                        part.add_sbar(*bar, rec.edep)?;
                        part.add_tray(bar % N_TRAY, rec.steplength)?;
                    }
                    Ok(part)
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .collect::<Result<Vec<_>>>()
    })?;

    let mut total = EventEdep::new();
    for part in &partials {
        total += part;
    }

    for (a, b) in total.sbar.iter().zip(serial.sbar.iter()) {
        assert!((a - b).abs() < 1e-12);
    }
    for (a, b) in total.tray.iter().zip(serial.tray.iter()) {
        assert!((a - b).abs() < 1e-9);
    }
    assert_eq!(total.sbar[0], 5.0);
    Ok(())
}

proptest! {
    #[test]
    fn add_touches_only_its_slot(index in 0usize..N_SBAR, value in -1e6f64..1e6) {
        let mut e = EventEdep::new();
        e.add_sbar(index, value).unwrap();
        for (i, v) in e.sbar.iter().enumerate() {
            if i == index {
                prop_assert_eq!(*v, value);
            } else {
                prop_assert_eq!(*v, 0.0);
            }
        }
        prop_assert!(e.tray.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn out_of_range_never_succeeds(index in N_TRAY..10_000usize, value in -1e6f64..1e6) {
        let mut e = EventEdep::new();
        prop_assert!(e.add_tray(index, value).is_err());
        if index >= N_SBAR {
            prop_assert!(e.add_sbar(index, value).is_err());
        }
        prop_assert!(e.tray.iter().all(|&v| v == 0.0));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip_is_identity(
        sbar in proptest::collection::vec(-1e9f64..1e9, N_SBAR),
        tray in proptest::collection::vec(-1e9f64..1e9, N_TRAY),
    ) {
        let mut e = EventEdep::new();
        e.sbar.copy_from_slice(&sbar);
        e.tray.copy_from_slice(&tray);
        let text = serde_json::to_string(&e).unwrap();
        let back: EventEdep = serde_json::from_str(&text).unwrap();
        prop_assert_eq!(back, e);
    }
}
