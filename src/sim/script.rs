use super::{BusMaster, Pins};
use crate::bus::BusKind;
use crate::parse::ScriptStmt;

//===========================================================================//

/// A read transaction that completed while replaying a script.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CompletedRead {
    /// The kind of read.
    pub kind: BusKind,
    /// The address or port that was read.
    pub addr: u32,
    /// The data returned by the environment.
    pub data: u16,
}

/// An `expect` statement whose value didn't match.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ExpectFailure {
    /// The script line of the `expect` statement.
    pub line: u32,
    /// The value the script expected.
    pub expected: u16,
    /// The data returned by the last completed read, or `None` if no read
    /// had completed yet.
    pub actual: Option<u16>,
}

//===========================================================================//

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum State {
    Ready,
    Waiting(BusKind, u32),
    Idling(u32),
    Done,
}

//===========================================================================//

/// A bus master that replays a parsed stimulus script in place of a
/// processor core.
///
/// The master holds the idle status while reset is asserted.  After that, on
/// each rising clock edge it presents the next transaction for one cycle,
/// then drives idle until it samples ready, at which point the transaction is
/// complete and the next statement runs.
pub struct ScriptMaster {
    stmts: Vec<ScriptStmt>,
    next: usize,
    state: State,
    reads: Vec<CompletedRead>,
    failures: Vec<ExpectFailure>,
}

impl ScriptMaster {
    /// Returns a master that will replay the given statements.
    pub fn new(stmts: Vec<ScriptStmt>) -> ScriptMaster {
        ScriptMaster {
            stmts,
            next: 0,
            state: State::Ready,
            reads: Vec::new(),
            failures: Vec::new(),
        }
    }

    /// Returns every read that has completed so far, in order.
    pub fn reads(&self) -> &[CompletedRead] {
        &self.reads
    }

    /// Returns every `expect` statement that has failed so far.
    pub fn failures(&self) -> &[ExpectFailure] {
        &self.failures
    }

    fn rising_edge(&mut self, pins: &mut Pins) {
        match self.state {
            State::Waiting(kind, addr) => {
                if !pins.ready {
                    pins.drive_idle();
                    return;
                }
                if kind.is_read() {
                    let data = pins.data_in;
                    self.reads.push(CompletedRead { kind, addr, data });
                }
            }
            State::Idling(remaining) if remaining > 0 => {
                self.state = State::Idling(remaining - 1);
                pins.drive_idle();
                return;
            }
            State::Done => {
                pins.drive_idle();
                return;
            }
            State::Ready | State::Idling(_) => {}
        }
        self.advance(pins);
    }

    fn advance(&mut self, pins: &mut Pins) {
        while let Some(&stmt) = self.stmts.get(self.next) {
            self.next += 1;
            match stmt {
                ScriptStmt::Transaction { kind, addr, data } => {
                    pins.drive(kind, addr, data);
                    self.state = State::Waiting(kind, addr);
                    return;
                }
                ScriptStmt::Idle(0) => {}
                ScriptStmt::Idle(cycles) => {
                    pins.drive_idle();
                    self.state = State::Idling(cycles - 1);
                    return;
                }
                ScriptStmt::Expect { value, line } => {
                    self.check(value, line);
                }
            }
        }
        pins.drive_idle();
        self.state = State::Done;
    }

    fn check(&mut self, expected: u16, line: u32) {
        let actual = self.reads.last().map(|read| read.data);
        if actual != Some(expected) {
            log::warn!(
                "line {line}: expected {expected:#06x}, got {}",
                actual.map_or("no read".to_string(), |d| format!("{d:#06x}"))
            );
            self.failures.push(ExpectFailure { line, expected, actual });
        }
    }
}

impl BusMaster for ScriptMaster {
    fn description(&self) -> String {
        format!("script master ({} statements)", self.stmts.len())
    }

    fn eval(&mut self, pins: &mut Pins) {
        if pins.reset {
            pins.drive_idle();
        } else if pins.clock {
            self.rising_edge(pins);
        }
    }

    fn is_finished(&self) -> bool {
        self.state == State::Done
    }
}

//===========================================================================//

#[cfg(test)]
mod tests {
    use super::{CompletedRead, ExpectFailure, ScriptMaster};
    use crate::bus::{BootRom, BusKind};
    use crate::io::PeripheralMap;
    use crate::parse::parse_script;
    use crate::sim::{BusMaster, RESET_CYCLES, SimEnv};

    fn make_env(script: &str) -> SimEnv<ScriptMaster> {
        let stmts = parse_script(script.as_bytes()).unwrap();
        let rom = BootRom::new(Box::new([0xeau8, 0x00, 0x34, 0x12]));
        SimEnv::new(ScriptMaster::new(stmts), rom, PeripheralMap::new())
    }

    #[test]
    fn empty_script_finishes_at_first_edge_after_reset() {
        let mut env = make_env("");
        let summary = env.run(100);
        assert!(summary.finished);
        assert_eq!(summary.cycles, RESET_CYCLES + 1);
        assert_eq!(summary.stats.total(), 0);
    }

    #[test]
    fn fetch_after_reset() {
        let mut env = make_env("fetch $ffff0\nexpect $00ea\n");
        let summary = env.run(100);
        assert!(summary.finished);
        assert_eq!(summary.stats.count(BusKind::CodeFetch), 1);
        assert_eq!(
            env.master().reads(),
            &[CompletedRead {
                kind: BusKind::CodeFetch,
                addr: 0xffff0,
                data: 0x00ea,
            }]
        );
        assert!(env.master().failures().is_empty());
    }

    #[test]
    fn each_transaction_takes_two_cycles() {
        let mut env = make_env("memw $10 $1111\nmemw $12 $2222\nmemr $10\n");
        let summary = env.run(100);
        assert!(summary.finished);
        // Reset, then two cycles per transaction, then one cycle to notice
        // the last ready.
        assert_eq!(summary.cycles, RESET_CYCLES + 3 * 2 + 1);
        assert_eq!(env.master().reads()[0].data, 0x1111);
    }

    #[test]
    fn idle_statement() {
        let mut env = make_env("idle 5");
        let summary = env.run(100);
        assert_eq!(summary.cycles, RESET_CYCLES + 5 + 1);
        assert_eq!(summary.stats.total(), 0);
    }

    #[test]
    fn expect_failures() {
        let mut env = make_env("expect 1\nior $a0\nexpect $84\nexpect 2\n");
        env.run(100);
        assert_eq!(
            env.master().failures(),
            &[
                ExpectFailure { line: 1, expected: 1, actual: None },
                ExpectFailure { line: 4, expected: 2, actual: Some(0x84) },
            ]
        );
    }

    #[test]
    fn writes_are_not_recorded_as_reads() {
        let mut env = make_env("iow $ba 7\ninta\nhalt\n");
        let summary = env.run(100);
        assert!(summary.finished);
        assert!(env.master().reads().is_empty());
        assert_eq!(summary.stats.count(BusKind::InterruptAck), 1);
        assert_eq!(summary.stats.count(BusKind::Halt), 1);
        assert_eq!(env.arbiter().io().eeprom().data(), 7);
    }

    #[test]
    fn description() {
        let master = ScriptMaster::new(vec![]);
        assert_eq!(master.description(), "script master (0 statements)");
        assert!(!master.is_finished());
    }
}

//===========================================================================//
