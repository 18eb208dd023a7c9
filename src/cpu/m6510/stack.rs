use super::{ExecState, Mos6510, StatusFlag};
use crate::core::{Bus, BusMaster};

impl Mos6510 {
    pub(crate) fn op_pha<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        match cycle {
            0 => {
                let _ = bus.read(master, self.pc);
                self.state = ExecState::Execute(self.opcode, 1);
            }
            1 => {
                bus.write(master, 0x0100 | self.sp as u16, self.a);
                self.sp = self.sp.wrapping_sub(1);
                self.state = ExecState::Fetch;
            }
            _ => unreachable!(),
        }
    }

    pub(crate) fn op_pla<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        match cycle {
            0 => {
                let _ = bus.read(master, self.pc);
                self.state = ExecState::Execute(self.opcode, 1);
            }
            1 => {
                let _ = bus.read(master, 0x0100 | self.sp as u16);
                self.sp = self.sp.wrapping_add(1);
                self.state = ExecState::Execute(self.opcode, 2);
            }
            2 => {
                let val = bus.read(master, 0x0100 | self.sp as u16);
                self.a = val;
                self.set_nz(val);
                self.state = ExecState::Fetch;
            }
            _ => unreachable!(),
        }
    }

    pub(crate) fn op_php<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        match cycle {
            0 => {
                let _ = bus.read(master, self.pc);
                self.state = ExecState::Execute(self.opcode, 1);
            }
            1 => {
                let pushed = self.p | StatusFlag::B as u8 | StatusFlag::U as u8;
                bus.write(master, 0x0100 | self.sp as u16, pushed);
                self.sp = self.sp.wrapping_sub(1);
                self.state = ExecState::Fetch;
            }
            _ => unreachable!(),
        }
    }

    pub(crate) fn op_plp<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        match cycle {
            0 => {
                let _ = bus.read(master, self.pc);
                self.state = ExecState::Execute(self.opcode, 1);
            }
            1 => {
                let _ = bus.read(master, 0x0100 | self.sp as u16);
                self.sp = self.sp.wrapping_add(1);
                self.state = ExecState::Execute(self.opcode, 2);
            }
            2 => {
                let pulled = bus.read(master, 0x0100 | self.sp as u16);
                self.p = (pulled | StatusFlag::U as u8) & !(StatusFlag::B as u8);
                self.state = ExecState::Fetch;
            }
            _ => unreachable!(),
        }
    }

    /// Software interrupt. Pushes PC+2 (the padding byte is skipped, not
    /// executed) and status with B=1, then loads the IRQ/BRK vector.
    pub(crate) fn op_brk<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        match cycle {
            0 => {
                let _ = bus.read(master, self.pc);
                self.pc = self.pc.wrapping_add(1);
                self.state = ExecState::Execute(self.opcode, 1);
            }
            1 => {
                bus.write(master, 0x0100 | self.sp as u16, (self.pc >> 8) as u8);
                self.sp = self.sp.wrapping_sub(1);
                self.state = ExecState::Execute(self.opcode, 2);
            }
            2 => {
                bus.write(master, 0x0100 | self.sp as u16, self.pc as u8);
                self.sp = self.sp.wrapping_sub(1);
                self.state = ExecState::Execute(self.opcode, 3);
            }
            3 => {
                let pushed = self.p | StatusFlag::B as u8 | StatusFlag::U as u8;
                bus.write(master, 0x0100 | self.sp as u16, pushed);
                self.sp = self.sp.wrapping_sub(1);
                self.state = ExecState::Execute(self.opcode, 4);
            }
            4 => {
                self.pc = bus.read(master, 0xFFFE) as u16;
                self.state = ExecState::Execute(self.opcode, 5);
            }
            5 => {
                self.pc |= (bus.read(master, 0xFFFF) as u16) << 8;
                self.set_flag(StatusFlag::I, true);
                self.state = ExecState::Fetch;
            }
            _ => unreachable!(),
        }
    }
}
