use super::{ExecState, Mos6510, StatusFlag};
use crate::core::{Bus, BusMaster};

impl Mos6510 {
    /// Generic conditional branch. Cycle 0 always reads the offset; if the
    /// condition is false the instruction ends there (2 cycles). If true,
    /// cycle 1 applies the offset and checks for a page crossing, adding a
    /// third cycle only when one occurred.
    fn branch<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
        taken: bool,
    ) {
        match cycle {
            0 => {
                let offset = bus.read(master, self.pc) as i8;
                self.pc = self.pc.wrapping_add(1);
                if !taken {
                    self.state = ExecState::Fetch;
                    return;
                }
                self.temp_addr = self.pc.wrapping_add(offset as u16);
                self.state = ExecState::Execute(self.opcode, 1);
            }
            1 => {
                let crossed = (self.pc ^ self.temp_addr) & 0xFF00 != 0;
                self.pc = self.temp_addr;
                self.state = if crossed {
                    ExecState::Execute(self.opcode, 2)
                } else {
                    ExecState::Fetch
                };
            }
            2 => {
                self.state = ExecState::Fetch;
            }
            _ => unreachable!(),
        }
    }

    pub(crate) fn op_bpl<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        let taken = self.p & StatusFlag::N as u8 == 0;
        self.branch(cycle, bus, master, taken);
    }

    pub(crate) fn op_bmi<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        let taken = self.p & StatusFlag::N as u8 != 0;
        self.branch(cycle, bus, master, taken);
    }

    pub(crate) fn op_bvc<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        let taken = self.p & StatusFlag::V as u8 == 0;
        self.branch(cycle, bus, master, taken);
    }

    pub(crate) fn op_bvs<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        let taken = self.p & StatusFlag::V as u8 != 0;
        self.branch(cycle, bus, master, taken);
    }

    pub(crate) fn op_bcc<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        let taken = self.p & StatusFlag::C as u8 == 0;
        self.branch(cycle, bus, master, taken);
    }

    pub(crate) fn op_bcs<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        let taken = self.p & StatusFlag::C as u8 != 0;
        self.branch(cycle, bus, master, taken);
    }

    pub(crate) fn op_bne<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        let taken = self.p & StatusFlag::Z as u8 == 0;
        self.branch(cycle, bus, master, taken);
    }

    pub(crate) fn op_beq<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        let taken = self.p & StatusFlag::Z as u8 != 0;
        self.branch(cycle, bus, master, taken);
    }

    pub(crate) fn op_jmp_abs<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        match cycle {
            0 => {
                self.temp_addr = bus.read(master, self.pc) as u16;
                self.pc = self.pc.wrapping_add(1);
                self.state = ExecState::Execute(self.opcode, 1);
            }
            1 => {
                let hi = bus.read(master, self.pc) as u16;
                self.pc = (hi << 8) | (self.temp_addr & 0x00FF);
                self.state = ExecState::Fetch;
            }
            _ => unreachable!(),
        }
    }

    /// JMP ($nnnn) reproduces the NMOS 6502 bug where the high-byte fetch
    /// wraps within the same page instead of crossing into the next one.
    pub(crate) fn op_jmp_ind<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        match cycle {
            0 => {
                self.temp_addr = bus.read(master, self.pc) as u16;
                self.pc = self.pc.wrapping_add(1);
                self.state = ExecState::Execute(self.opcode, 1);
            }
            1 => {
                self.temp_addr |= (bus.read(master, self.pc) as u16) << 8;
                self.pc = self.pc.wrapping_add(1);
                self.state = ExecState::Execute(self.opcode, 2);
            }
            2 => {
                self.temp_data = bus.read(master, self.temp_addr);
                self.state = ExecState::Execute(self.opcode, 3);
            }
            3 => {
                let hi_addr = (self.temp_addr & 0xFF00) | (self.temp_addr.wrapping_add(1) & 0x00FF);
                let hi = bus.read(master, hi_addr);
                self.pc = ((hi as u16) << 8) | self.temp_data as u16;
                self.state = ExecState::Fetch;
            }
            _ => unreachable!(),
        }
    }

    pub(crate) fn op_jsr<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        match cycle {
            0 => {
                self.temp_addr = bus.read(master, self.pc) as u16;
                self.pc = self.pc.wrapping_add(1);
                self.state = ExecState::Execute(self.opcode, 1);
            }
            1 => {
                let _ = bus.read(master, 0x0100 | self.sp as u16);
                self.state = ExecState::Execute(self.opcode, 2);
            }
            2 => {
                bus.write(master, 0x0100 | self.sp as u16, (self.pc >> 8) as u8);
                self.sp = self.sp.wrapping_sub(1);
                self.state = ExecState::Execute(self.opcode, 3);
            }
            3 => {
                bus.write(master, 0x0100 | self.sp as u16, self.pc as u8);
                self.sp = self.sp.wrapping_sub(1);
                self.state = ExecState::Execute(self.opcode, 4);
            }
            4 => {
                let hi = bus.read(master, self.pc) as u16;
                self.pc = (hi << 8) | (self.temp_addr & 0x00FF);
                self.state = ExecState::Fetch;
            }
            _ => unreachable!(),
        }
    }

    pub(crate) fn op_rts<B: Bus<Address = u16, Data = u8> + ?Sized>(
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
                self.temp_addr = bus.read(master, 0x0100 | self.sp as u16) as u16;
                self.sp = self.sp.wrapping_add(1);
                self.state = ExecState::Execute(self.opcode, 3);
            }
            3 => {
                let hi = bus.read(master, 0x0100 | self.sp as u16) as u16;
                self.temp_addr |= hi << 8;
                self.state = ExecState::Execute(self.opcode, 4);
            }
            4 => {
                let _ = bus.read(master, self.temp_addr);
                self.pc = self.temp_addr.wrapping_add(1);
                self.state = ExecState::Fetch;
            }
            _ => unreachable!(),
        }
    }

    pub(crate) fn op_rti<B: Bus<Address = u16, Data = u8> + ?Sized>(
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
                self.sp = self.sp.wrapping_add(1);
                self.state = ExecState::Execute(self.opcode, 3);
            }
            3 => {
                self.temp_addr = bus.read(master, 0x0100 | self.sp as u16) as u16;
                self.sp = self.sp.wrapping_add(1);
                self.state = ExecState::Execute(self.opcode, 4);
            }
            4 => {
                let hi = bus.read(master, 0x0100 | self.sp as u16) as u16;
                self.pc = self.temp_addr | (hi << 8);
                self.state = ExecState::Fetch;
            }
            _ => unreachable!(),
        }
    }
}
