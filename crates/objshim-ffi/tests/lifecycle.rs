//! Drives the exported C functions the way a foreign caller would.

#![allow(unsafe_code)]

use objshim_ffi::{
    construct, destruct, mul, multiply, objconstructor, objdestructor, objshim_create,
    objshim_destroy, objshim_multiply, objshim_subtract, sub, subtract, ShimStatus,
};
use proptest::prelude::*;

fn checked_create(value: i32) -> u64 {
    let mut h = 0u64;
    assert_eq!(objshim_create(value, &mut h), ShimStatus::Ok as i32);
    h
}

#[test]
fn raw_examples() {
    let h = construct(5);
    unsafe {
        assert_eq!(multiply(h, 3), 15);
        assert_eq!(subtract(h, 3), 2);
        destruct(h);
    }

    let h2 = construct(-7);
    unsafe {
        assert_eq!(multiply(h2, 2), -14);
        destruct(h2);
    }
}

#[test]
fn legacy_binding_map_scenario() {
    // obj = MyObject(8); obj.mul(4); obj.sub(3)
    let obj = objconstructor(8);
    unsafe {
        assert_eq!(mul(obj, 4), 32);
        assert_eq!(sub(obj, 3), 5);
        objdestructor(obj);
    }
}

#[test]
fn many_objects_interleaved() {
    let handles: Vec<_> = (-50..50).map(|v| construct(v)).collect();
    for &h in handles.iter().step_by(2) {
        unsafe { destruct(h) };
    }
    for (i, &h) in handles.iter().enumerate().skip(1).step_by(2) {
        let value = i as i32 - 50;
        unsafe {
            assert_eq!(multiply(h, 3), value * 3);
            assert_eq!(subtract(h, 1), value - 1);
            destruct(h);
        }
    }
}

#[test]
fn checked_handles_survive_slot_reuse() {
    let a = checked_create(1);
    assert_eq!(objshim_destroy(a), 0);
    let b = checked_create(2);
    let mut out = 0;
    assert_eq!(
        objshim_multiply(a, 10, &mut out),
        ShimStatus::InvalidHandle as i32
    );
    assert_eq!(objshim_multiply(b, 10, &mut out), 0);
    assert_eq!(out, 20);
    assert_eq!(objshim_destroy(b), 0);
}

#[test]
fn checked_surface_is_usable_from_threads() {
    let workers: Vec<_> = (0..8)
        .map(|t| {
            std::thread::spawn(move || {
                for v in 0..200 {
                    let value = t * 1000 + v;
                    let h = checked_create(value);
                    let mut out = 0;
                    assert_eq!(objshim_subtract(h, value, &mut out), 0);
                    assert_eq!(out, 0);
                    assert_eq!(objshim_destroy(h), 0);
                }
            })
        })
        .collect();
    for w in workers {
        w.join().unwrap();
    }
}

proptest! {
    #[test]
    fn raw_multiply_wraps(a in any::<i32>(), b in any::<i32>()) {
        let h = construct(a);
        let got = unsafe { multiply(h, b) };
        unsafe { destruct(h) };
        prop_assert_eq!(got, a.wrapping_mul(b));
    }

    #[test]
    fn raw_subtract_wraps(a in any::<i32>(), b in any::<i32>()) {
        let h = construct(a);
        let got = unsafe { subtract(h, b) };
        unsafe { destruct(h) };
        prop_assert_eq!(got, a.wrapping_sub(b));
    }

    #[test]
    fn checked_matches_raw(a in any::<i32>(), b in any::<i32>()) {
        let raw = construct(a);
        let h = checked_create(a);
        let (mut m, mut s) = (0, 0);
        prop_assert_eq!(objshim_multiply(h, b, &mut m), 0);
        prop_assert_eq!(objshim_subtract(h, b, &mut s), 0);
        prop_assert_eq!(m, unsafe { multiply(raw, b) });
        prop_assert_eq!(s, unsafe { subtract(raw, b) });
        prop_assert_eq!(objshim_destroy(h), 0);
        unsafe { destruct(raw) };
    }
}
