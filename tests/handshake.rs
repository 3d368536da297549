//! Checks the ready handshake from the processor's side of the bus.

use v30env::bus::{BootRom, BusKind};
use v30env::io::PeripheralMap;
use v30env::sim::{BusMaster, Pins, RESET_CYCLES, SimEnv};

//===========================================================================//

/// Issues a single transaction on the first cycle after reset, and records
/// what it samples on every rising edge.
struct Recorder {
    kind: BusKind,
    addr: u32,
    data: u16,
    cycle: u64,
    issued_at: Option<u64>,
    samples: Vec<(u64, bool, u16)>,
}

impl Recorder {
    fn new(kind: BusKind, addr: u32, data: u16) -> Recorder {
        Recorder {
            kind,
            addr,
            data,
            cycle: 0,
            issued_at: None,
            samples: vec![],
        }
    }

    fn sample_at(&self, cycle: u64) -> (bool, u16) {
        let &(_, ready, data_in) =
            self.samples.iter().find(|sample| sample.0 == cycle).unwrap();
        (ready, data_in)
    }
}

impl BusMaster for Recorder {
    fn description(&self) -> String {
        "recorder".to_string()
    }

    fn eval(&mut self, pins: &mut Pins) {
        if !pins.clock {
            return;
        }
        self.samples.push((self.cycle, pins.ready, pins.data_in));
        if !pins.reset && self.issued_at.is_none() {
            pins.drive(self.kind, self.addr, self.data);
            self.issued_at = Some(self.cycle);
        } else {
            pins.drive_idle();
        }
        self.cycle += 1;
    }
}

fn make_env(master: Recorder) -> SimEnv<Recorder> {
    let rom = BootRom::new(Box::new([0xeau8, 0x00, 0x34, 0x12]));
    SimEnv::new(master, rom, PeripheralMap::new())
}

//===========================================================================//

#[test]
fn read_completes_one_cycle_after_issue() {
    let mut env = make_env(Recorder::new(BusKind::MemRead, 0x10002, 0));
    env.run(RESET_CYCLES + 4);
    let recorder = env.master();
    let issued = recorder.issued_at.unwrap();
    assert_eq!(issued, RESET_CYCLES);
    // Nothing is visible on the cycle the request goes out.
    assert_eq!(recorder.sample_at(issued), (false, 0));
    // The data is on the bus from the next cycle, but ready is still low
    // while the arbiter completes the transaction.
    assert_eq!(recorder.sample_at(issued + 1), (false, 0x1234));
    // Ready is high from then on.
    assert_eq!(recorder.sample_at(issued + 2), (true, 0x1234));
    assert_eq!(recorder.sample_at(issued + 3), (true, 0x1234));
    assert_eq!(env.arbiter().stats().count(BusKind::MemRead), 1);
}

#[test]
fn request_held_through_ready_cycle_is_serviced_once() {
    struct Stubborn;

    impl BusMaster for Stubborn {
        fn description(&self) -> String {
            "stubborn".to_string()
        }

        fn eval(&mut self, pins: &mut Pins) {
            if pins.reset {
                pins.drive_idle();
            } else {
                pins.drive(BusKind::MemWrite, 0x0200, 0x5a5a);
            }
        }
    }

    let rom = BootRom::new(Box::new([0u8; 16]));
    let mut env = SimEnv::new(Stubborn, rom, PeripheralMap::new());
    env.run(RESET_CYCLES + 6);
    // Held for six cycles, the request is serviced on every other one.
    assert_eq!(env.arbiter().stats().count(BusKind::MemWrite), 3);
    assert_eq!(env.arbiter().memory().read16(0x0200), 0x5a5a);
}

#[test]
fn write_updates_device_when_serviced() {
    let mut env = make_env(Recorder::new(BusKind::IoWrite, 0xba, 0x4321));
    env.run(RESET_CYCLES + 1);
    assert_eq!(env.arbiter().io().eeprom().data(), 0x4321);
    assert!(!env.pins().ready);
    env.step();
    assert!(env.pins().ready);
}
