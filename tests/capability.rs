// Copyright 2024 OKX Group
// Licensed under the Apache License, Version 2.0, see LICENSE for details.
// SPDX-License-Identifier: Apache-2.0

use std::str::FromStr;

use cudacap::{ComputeCapability, Error};

#[test]
fn test_display_is_dotted_pair() {
    let cap = ComputeCapability { major: 8, minor: 6 };
    assert_eq!(cap.to_string(), "8.6");
    let cap = ComputeCapability { major: 12, minor: 0 };
    assert_eq!(cap.to_string(), "12.0");
}

#[test]
fn test_from_str_round_trips() {
    for s in ["3.7", "7.0", "8.6", "9.0", "12.0"] {
        let cap = ComputeCapability::from_str(s).unwrap();
        assert_eq!(cap.to_string(), s);
    }
}

#[test]
fn test_from_str_rejects_malformed() {
    for s in ["", "8", "8.", ".6", "8.6.1", "a.b", "8.b", "-1.2", " 8.6"] {
        assert!(ComputeCapability::from_str(s).is_err(), "accepted {:?}", s);
    }
}

#[test]
fn test_ordering_is_major_then_minor() {
    let volta = ComputeCapability { major: 7, minor: 0 };
    let turing = ComputeCapability { major: 7, minor: 5 };
    let ampere = ComputeCapability { major: 8, minor: 0 };
    assert!(volta < turing);
    assert!(turing < ampere);
    assert!(ampere >= ComputeCapability { major: 8, minor: 0 });
}

#[test]
fn test_cores_per_multiprocessor_known_generations() {
    // V100 is 80 SMs x 64 = 5120 cores, RTX 3090 is 82 SMs x 128 = 10496.
    let cases = [
        ((3, 5), 192),
        ((5, 2), 128),
        ((6, 0), 64),
        ((6, 1), 128),
        ((7, 0), 64),
        ((7, 5), 64),
        ((8, 0), 64),
        ((8, 6), 128),
        ((9, 0), 128),
    ];
    for ((major, minor), cores) in cases {
        let cap = ComputeCapability { major, minor };
        assert_eq!(cap.cores_per_multiprocessor(), Some(cores), "{}", cap);
    }
}

#[test]
fn test_cores_per_multiprocessor_unknown_generation() {
    let cap = ComputeCapability { major: 99, minor: 0 };
    assert_eq!(cap.cores_per_multiprocessor(), None);
}

#[test]
fn test_out_of_range_error_message() {
    let err = Error::DeviceOutOfRange { ordinal: 2, count: 1 };
    assert_eq!(
        err.to_string(),
        "device ordinal 2 out of range, 1 device(s) visible"
    );
}
