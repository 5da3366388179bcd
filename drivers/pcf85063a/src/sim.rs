//! Simulated PCF85063A register file for unit tests

use hal_abstractions::bus::{merge_masked, RegisterBus};

use crate::registers::reg;

/// Bus call recorded by [`SimBus`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BusOp {
    Read(u8),
    Write(u8, u8),
    Update { reg: u8, mask: u8, value: u8 },
    BurstRead(u8, usize),
    BurstWrite(u8, Vec<u8>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimError;

/// Register file that stores writes and serves reads
pub struct SimBus {
    pub regs: [u8; reg::TIMER_MODE as usize + 1],
    pub log: Vec<BusOp>,
    pub ready: bool,
    /// Index into `log` of the call that fails
    pub fail_at: Option<usize>,
}

impl SimBus {
    pub fn new() -> Self {
        Self {
            regs: [0; reg::TIMER_MODE as usize + 1],
            log: Vec::new(),
            ready: true,
            fail_at: None,
        }
    }

    fn record(&mut self, op: BusOp) -> Result<(), SimError> {
        self.log.push(op);
        if self.fail_at == Some(self.log.len() - 1) {
            return Err(SimError);
        }
        Ok(())
    }
}

impl RegisterBus for SimBus {
    type Error = SimError;

    fn is_ready(&mut self) -> bool {
        self.ready
    }

    fn read_reg(&mut self, reg: u8) -> Result<u8, SimError> {
        self.record(BusOp::Read(reg))?;
        Ok(self.regs[usize::from(reg)])
    }

    fn write_reg(&mut self, reg: u8, value: u8) -> Result<(), SimError> {
        self.record(BusOp::Write(reg, value))?;
        self.regs[usize::from(reg)] = value;
        Ok(())
    }

    fn update_reg(&mut self, reg: u8, mask: u8, value: u8) -> Result<(), SimError> {
        self.record(BusOp::Update { reg, mask, value })?;
        let r = usize::from(reg);
        self.regs[r] = merge_masked(self.regs[r], mask, value);
        Ok(())
    }

    fn burst_read(&mut self, start: u8, buf: &mut [u8]) -> Result<(), SimError> {
        self.record(BusOp::BurstRead(start, buf.len()))?;
        let start = usize::from(start);
        buf.copy_from_slice(&self.regs[start..start + buf.len()]);
        Ok(())
    }

    fn burst_write(&mut self, start: u8, data: &[u8]) -> Result<(), SimError> {
        self.record(BusOp::BurstWrite(start, data.to_vec()))?;
        let start = usize::from(start);
        self.regs[start..start + data.len()].copy_from_slice(data);
        Ok(())
    }
}
