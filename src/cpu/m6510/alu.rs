use super::{ExecState, Mos6510, StatusFlag};
use crate::core::{Bus, BusMaster};

impl Mos6510 {
    #[inline]
    pub(crate) fn set_nz(&mut self, result: u8) {
        self.set_flag(StatusFlag::N, result & 0x80 != 0);
        self.set_flag(StatusFlag::Z, result == 0);
    }

    #[inline]
    pub(crate) fn set_flags_shift(&mut self, result: u8, carry: bool) {
        self.set_flag(StatusFlag::C, carry);
        self.set_nz(result);
    }

    /// NMOS decimal-mode ADC. Z is always computed from the pure binary
    /// sum; N and V come from the pre-BCD-correction intermediate result.
    pub(crate) fn perform_adc(&mut self, operand: u8) {
        let c = if self.p & StatusFlag::C as u8 != 0 { 1 } else { 0 };
        let a = self.a;

        let binary_sum = a as u16 + operand as u16 + c as u16;
        let binary_result = binary_sum as u8;

        if self.p & StatusFlag::D as u8 != 0 {
            let mut lo = (a & 0x0F) as u16 + (operand & 0x0F) as u16 + c as u16;
            let mut hi = (a >> 4) as u16 + (operand >> 4) as u16;
            if lo > 9 {
                lo += 6;
                hi += 1;
            }

            let pre_correct = (hi << 4) | (lo & 0x0F);
            self.set_flag(StatusFlag::N, pre_correct & 0x80 != 0);
            let overflow = (!(a ^ operand) & (a ^ pre_correct as u8)) & 0x80 != 0;
            self.set_flag(StatusFlag::V, overflow);

            if hi > 9 {
                hi += 6;
            }
            let result = ((hi << 4) | (lo & 0x0F)) as u8;
            self.set_flag(StatusFlag::C, hi > 15);
            self.set_flag(StatusFlag::Z, binary_result == 0);
            self.a = result;
        } else {
            self.set_flag(StatusFlag::C, binary_sum > 0xFF);
            let overflow = (!(a ^ operand) & (a ^ binary_result)) & 0x80 != 0;
            self.set_flag(StatusFlag::V, overflow);
            self.set_nz(binary_result);
            self.a = binary_result;
        }
    }

    /// NMOS decimal-mode SBC. All flags come from the binary subtraction
    /// regardless of mode; only the stored accumulator value gets the BCD
    /// correction in decimal mode.
    pub(crate) fn perform_sbc(&mut self, operand: u8) {
        let c = if self.p & StatusFlag::C as u8 != 0 { 1 } else { 0 };
        let a = self.a;
        let inverted = !operand;

        let binary_sum = a as u16 + inverted as u16 + c as u16;
        let binary_result = binary_sum as u8;

        self.set_flag(StatusFlag::C, binary_sum > 0xFF);
        let overflow = ((a ^ operand) & (a ^ binary_result)) & 0x80 != 0;
        self.set_flag(StatusFlag::V, overflow);
        self.set_nz(binary_result);

        if self.p & StatusFlag::D as u8 != 0 {
            let mut lo = (a & 0x0F) as i16 - (operand & 0x0F) as i16 - (1 - c) as i16;
            let mut hi = (a >> 4) as i16 - (operand >> 4) as i16;
            if lo < 0 {
                lo -= 6;
                hi -= 1;
            }
            if hi < 0 {
                hi -= 6;
            }
            self.a = (((hi << 4) & 0xF0) | (lo & 0x0F)) as u8;
        } else {
            self.a = binary_result;
        }
    }

    pub(crate) fn perform_compare(&mut self, register: u8, operand: u8) {
        self.set_flag(StatusFlag::C, register >= operand);
        self.set_nz(register.wrapping_sub(operand));
    }

    pub(crate) fn perform_and(&mut self, operand: u8) {
        self.a &= operand;
        self.set_nz(self.a);
    }

    pub(crate) fn perform_ora(&mut self, operand: u8) {
        self.a |= operand;
        self.set_nz(self.a);
    }

    pub(crate) fn perform_eor(&mut self, operand: u8) {
        self.a ^= operand;
        self.set_nz(self.a);
    }

    pub(crate) fn perform_bit(&mut self, operand: u8) {
        self.set_flag(StatusFlag::N, operand & 0x80 != 0);
        self.set_flag(StatusFlag::V, operand & 0x40 != 0);
        self.set_flag(StatusFlag::Z, self.a & operand == 0);
    }

    pub(crate) fn perform_asl(&mut self, value: u8) -> u8 {
        let carry = value & 0x80 != 0;
        let result = value << 1;
        self.set_flags_shift(result, carry);
        result
    }

    pub(crate) fn perform_lsr(&mut self, value: u8) -> u8 {
        let carry = value & 0x01 != 0;
        let result = value >> 1;
        self.set_flags_shift(result, carry);
        result
    }

    pub(crate) fn perform_rol(&mut self, value: u8) -> u8 {
        let carry_in = self.p & StatusFlag::C as u8 != 0;
        let carry_out = value & 0x80 != 0;
        let result = (value << 1) | (carry_in as u8);
        self.set_flags_shift(result, carry_out);
        result
    }

    pub(crate) fn perform_ror(&mut self, value: u8) -> u8 {
        let carry_in = self.p & StatusFlag::C as u8 != 0;
        let carry_out = value & 0x01 != 0;
        let result = (value >> 1) | ((carry_in as u8) << 7);
        self.set_flags_shift(result, carry_out);
        result
    }

    // ---- read-mode addressing helpers ----
    // Each helper advances `cycle` until the operand byte is available, then
    // invokes `op` and returns to Fetch. Indexed modes shortcut by one cycle
    // when no page boundary is crossed.

    pub(crate) fn alu_imm<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
        op: impl FnOnce(&mut Self, u8),
    ) {
        if cycle == 0 {
            let val = bus.read(master, self.pc);
            self.pc = self.pc.wrapping_add(1);
            op(self, val);
            self.state = ExecState::Fetch;
        }
    }

    pub(crate) fn alu_zp<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
        op: impl FnOnce(&mut Self, u8),
    ) {
        match cycle {
            0 => {
                self.temp_addr = bus.read(master, self.pc) as u16;
                self.pc = self.pc.wrapping_add(1);
                self.state = ExecState::Execute(self.opcode, 1);
            }
            1 => {
                let val = bus.read(master, self.temp_addr);
                op(self, val);
                self.state = ExecState::Fetch;
            }
            _ => unreachable!(),
        }
    }

    fn fetch_zp_indexed<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
        index: u8,
    ) -> bool {
        match cycle {
            0 => {
                self.temp_addr = bus.read(master, self.pc) as u16;
                self.pc = self.pc.wrapping_add(1);
                self.state = ExecState::Execute(self.opcode, 1);
                false
            }
            1 => {
                let _ = bus.read(master, self.temp_addr);
                self.temp_addr = (self.temp_addr as u8).wrapping_add(index) as u16;
                self.state = ExecState::Execute(self.opcode, 2);
                false
            }
            _ => true,
        }
    }

    pub(crate) fn alu_zp_x<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
        op: impl FnOnce(&mut Self, u8),
    ) {
        let x = self.x;
        if self.fetch_zp_indexed(cycle, bus, master, x) {
            let val = bus.read(master, self.temp_addr);
            op(self, val);
            self.state = ExecState::Fetch;
        }
    }

    pub(crate) fn alu_zp_y<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
        op: impl FnOnce(&mut Self, u8),
    ) {
        let y = self.y;
        if self.fetch_zp_indexed(cycle, bus, master, y) {
            let val = bus.read(master, self.temp_addr);
            op(self, val);
            self.state = ExecState::Fetch;
        }
    }

    pub(crate) fn alu_abs<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
        op: impl FnOnce(&mut Self, u8),
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
                let val = bus.read(master, self.temp_addr);
                op(self, val);
                self.state = ExecState::Fetch;
            }
            _ => unreachable!(),
        }
    }

    fn fetch_abs_indexed<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
        index: u8,
    ) -> Option<u8> {
        match cycle {
            0 => {
                self.temp_addr = bus.read(master, self.pc) as u16;
                self.pc = self.pc.wrapping_add(1);
                self.state = ExecState::Execute(self.opcode, 1);
                None
            }
            1 => {
                let base_hi = bus.read(master, self.pc) as u16;
                self.pc = self.pc.wrapping_add(1);
                let unfixed_lo = (self.temp_addr as u8).wrapping_add(index);
                let crossed = (self.temp_addr as u8).checked_add(index).is_none();
                self.temp_addr = (base_hi << 8) | unfixed_lo as u16;
                if crossed {
                    self.state = ExecState::Execute(self.opcode, 2);
                    None
                } else {
                    let val = bus.read(master, self.temp_addr);
                    self.state = ExecState::Fetch;
                    Some(val)
                }
            }
            2 => {
                self.temp_addr = self.temp_addr.wrapping_add(0x0100);
                let val = bus.read(master, self.temp_addr);
                self.state = ExecState::Fetch;
                Some(val)
            }
            _ => unreachable!(),
        }
    }

    pub(crate) fn alu_abs_x<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
        op: impl FnOnce(&mut Self, u8),
    ) {
        let x = self.x;
        if let Some(val) = self.fetch_abs_indexed(cycle, bus, master, x) {
            op(self, val);
        }
    }

    pub(crate) fn alu_abs_y<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
        op: impl FnOnce(&mut Self, u8),
    ) {
        let y = self.y;
        if let Some(val) = self.fetch_abs_indexed(cycle, bus, master, y) {
            op(self, val);
        }
    }

    pub(crate) fn alu_ind_x<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
        op: impl FnOnce(&mut Self, u8),
    ) {
        match cycle {
            0 => {
                self.temp_addr = bus.read(master, self.pc) as u16;
                self.pc = self.pc.wrapping_add(1);
                self.state = ExecState::Execute(self.opcode, 1);
            }
            1 => {
                let _ = bus.read(master, self.temp_addr);
                self.temp_addr = (self.temp_addr as u8).wrapping_add(self.x) as u16;
                self.state = ExecState::Execute(self.opcode, 2);
            }
            2 => {
                self.temp_data = bus.read(master, self.temp_addr);
                self.state = ExecState::Execute(self.opcode, 3);
            }
            3 => {
                let hi_ptr = (self.temp_addr as u8).wrapping_add(1) as u16;
                let hi = bus.read(master, hi_ptr);
                self.temp_addr = ((hi as u16) << 8) | self.temp_data as u16;
                self.state = ExecState::Execute(self.opcode, 4);
            }
            4 => {
                let val = bus.read(master, self.temp_addr);
                op(self, val);
                self.state = ExecState::Fetch;
            }
            _ => unreachable!(),
        }
    }

    pub(crate) fn alu_ind_y<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
        op: impl FnOnce(&mut Self, u8),
    ) {
        match cycle {
            0 => {
                self.temp_addr = bus.read(master, self.pc) as u16;
                self.pc = self.pc.wrapping_add(1);
                self.state = ExecState::Execute(self.opcode, 1);
            }
            1 => {
                self.temp_data = bus.read(master, self.temp_addr);
                self.state = ExecState::Execute(self.opcode, 2);
            }
            2 => {
                let ptr_hi = (self.temp_addr as u8).wrapping_add(1) as u16;
                let hi = bus.read(master, ptr_hi) as u16;
                let unfixed_lo = self.temp_data.wrapping_add(self.y);
                let crossed = self.temp_data.checked_add(self.y).is_none();
                self.temp_addr = (hi << 8) | unfixed_lo as u16;
                if crossed {
                    self.state = ExecState::Execute(self.opcode, 3);
                } else {
                    let val = bus.read(master, self.temp_addr);
                    op(self, val);
                    self.state = ExecState::Fetch;
                }
            }
            3 => {
                self.temp_addr = self.temp_addr.wrapping_add(0x0100);
                let val = bus.read(master, self.temp_addr);
                op(self, val);
                self.state = ExecState::Fetch;
            }
            _ => unreachable!(),
        }
    }

    // ---- write-mode addressing helpers ----
    // Writes never shortcut on the indexed forms: the CPU always performs
    // the dummy read at the unfixed address before the real write.

    pub(crate) fn store_zp<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
        value: u8,
    ) {
        match cycle {
            0 => {
                self.temp_addr = bus.read(master, self.pc) as u16;
                self.pc = self.pc.wrapping_add(1);
                self.state = ExecState::Execute(self.opcode, 1);
            }
            1 => {
                bus.write(master, self.temp_addr, value);
                self.state = ExecState::Fetch;
            }
            _ => unreachable!(),
        }
    }

    fn store_zp_indexed<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
        index: u8,
        value: u8,
    ) {
        match cycle {
            0 => {
                self.temp_addr = bus.read(master, self.pc) as u16;
                self.pc = self.pc.wrapping_add(1);
                self.state = ExecState::Execute(self.opcode, 1);
            }
            1 => {
                let _ = bus.read(master, self.temp_addr);
                self.temp_addr = (self.temp_addr as u8).wrapping_add(index) as u16;
                self.state = ExecState::Execute(self.opcode, 2);
            }
            2 => {
                bus.write(master, self.temp_addr, value);
                self.state = ExecState::Fetch;
            }
            _ => unreachable!(),
        }
    }

    pub(crate) fn store_zp_x<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
        value: u8,
    ) {
        let x = self.x;
        self.store_zp_indexed(cycle, bus, master, x, value);
    }

    pub(crate) fn store_zp_y<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
        value: u8,
    ) {
        let y = self.y;
        self.store_zp_indexed(cycle, bus, master, y, value);
    }

    pub(crate) fn store_abs<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
        value: u8,
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
                bus.write(master, self.temp_addr, value);
                self.state = ExecState::Fetch;
            }
            _ => unreachable!(),
        }
    }

    fn store_abs_indexed<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
        index: u8,
        value: u8,
    ) {
        match cycle {
            0 => {
                self.temp_addr = bus.read(master, self.pc) as u16;
                self.pc = self.pc.wrapping_add(1);
                self.state = ExecState::Execute(self.opcode, 1);
            }
            1 => {
                let base_hi = bus.read(master, self.pc) as u16;
                self.pc = self.pc.wrapping_add(1);
                let unfixed_lo = (self.temp_addr as u8).wrapping_add(index);
                self.temp_data = if (self.temp_addr as u8).checked_add(index).is_none() {
                    1
                } else {
                    0
                };
                self.temp_addr = (base_hi << 8) | unfixed_lo as u16;
                self.state = ExecState::Execute(self.opcode, 2);
            }
            2 => {
                let _ = bus.read(master, self.temp_addr);
                if self.temp_data != 0 {
                    self.temp_addr = self.temp_addr.wrapping_add(0x0100);
                }
                self.state = ExecState::Execute(self.opcode, 3);
            }
            3 => {
                bus.write(master, self.temp_addr, value);
                self.state = ExecState::Fetch;
            }
            _ => unreachable!(),
        }
    }

    pub(crate) fn store_abs_x<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
        value: u8,
    ) {
        let x = self.x;
        self.store_abs_indexed(cycle, bus, master, x, value);
    }

    pub(crate) fn store_abs_y<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
        value: u8,
    ) {
        let y = self.y;
        self.store_abs_indexed(cycle, bus, master, y, value);
    }

    pub(crate) fn store_ind_x<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
        value: u8,
    ) {
        match cycle {
            0 => {
                self.temp_addr = bus.read(master, self.pc) as u16;
                self.pc = self.pc.wrapping_add(1);
                self.state = ExecState::Execute(self.opcode, 1);
            }
            1 => {
                let _ = bus.read(master, self.temp_addr);
                self.temp_addr = (self.temp_addr as u8).wrapping_add(self.x) as u16;
                self.state = ExecState::Execute(self.opcode, 2);
            }
            2 => {
                self.temp_data = bus.read(master, self.temp_addr);
                self.state = ExecState::Execute(self.opcode, 3);
            }
            3 => {
                let hi_ptr = (self.temp_addr as u8).wrapping_add(1) as u16;
                let hi = bus.read(master, hi_ptr);
                self.temp_addr = ((hi as u16) << 8) | self.temp_data as u16;
                self.state = ExecState::Execute(self.opcode, 4);
            }
            4 => {
                bus.write(master, self.temp_addr, value);
                self.state = ExecState::Fetch;
            }
            _ => unreachable!(),
        }
    }

    pub(crate) fn store_ind_y<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
        value: u8,
    ) {
        match cycle {
            0 => {
                self.temp_addr = bus.read(master, self.pc) as u16;
                self.pc = self.pc.wrapping_add(1);
                self.state = ExecState::Execute(self.opcode, 1);
            }
            1 => {
                self.temp_data = bus.read(master, self.temp_addr);
                self.state = ExecState::Execute(self.opcode, 2);
            }
            2 => {
                let ptr_hi = (self.temp_addr as u8).wrapping_add(1) as u16;
                let hi = bus.read(master, ptr_hi) as u16;
                let unfixed_lo = self.temp_data.wrapping_add(self.y);
                self.temp_data = if self.temp_data.checked_add(self.y).is_none() {
                    1
                } else {
                    0
                };
                self.temp_addr = (hi << 8) | unfixed_lo as u16;
                self.state = ExecState::Execute(self.opcode, 3);
            }
            3 => {
                let _ = bus.read(master, self.temp_addr);
                if self.temp_data != 0 {
                    self.temp_addr = self.temp_addr.wrapping_add(0x0100);
                }
                self.state = ExecState::Execute(self.opcode, 4);
            }
            4 => {
                bus.write(master, self.temp_addr, value);
                self.state = ExecState::Fetch;
            }
            _ => unreachable!(),
        }
    }

    // ---- read-modify-write addressing helpers ----
    // RMW always takes the full cycle count and always writes the
    // unmodified value back before writing the modified one.

    pub(crate) fn rmw_zp<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
        op: impl FnOnce(&mut Self, u8) -> u8,
    ) {
        match cycle {
            0 => {
                self.temp_addr = bus.read(master, self.pc) as u16;
                self.pc = self.pc.wrapping_add(1);
                self.state = ExecState::Execute(self.opcode, 1);
            }
            1 => {
                self.temp_data = bus.read(master, self.temp_addr);
                self.state = ExecState::Execute(self.opcode, 2);
            }
            2 => {
                bus.write(master, self.temp_addr, self.temp_data);
                self.state = ExecState::Execute(self.opcode, 3);
            }
            3 => {
                let result = op(self, self.temp_data);
                bus.write(master, self.temp_addr, result);
                self.state = ExecState::Fetch;
            }
            _ => unreachable!(),
        }
    }

    fn rmw_zp_indexed<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
        index: u8,
        op: impl FnOnce(&mut Self, u8) -> u8,
    ) {
        match cycle {
            0 => {
                self.temp_addr = bus.read(master, self.pc) as u16;
                self.pc = self.pc.wrapping_add(1);
                self.state = ExecState::Execute(self.opcode, 1);
            }
            1 => {
                let _ = bus.read(master, self.temp_addr);
                self.temp_addr = (self.temp_addr as u8).wrapping_add(index) as u16;
                self.state = ExecState::Execute(self.opcode, 2);
            }
            2 => {
                self.temp_data = bus.read(master, self.temp_addr);
                self.state = ExecState::Execute(self.opcode, 3);
            }
            3 => {
                bus.write(master, self.temp_addr, self.temp_data);
                self.state = ExecState::Execute(self.opcode, 4);
            }
            4 => {
                let result = op(self, self.temp_data);
                bus.write(master, self.temp_addr, result);
                self.state = ExecState::Fetch;
            }
            _ => unreachable!(),
        }
    }

    pub(crate) fn rmw_zp_x<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
        op: impl FnOnce(&mut Self, u8) -> u8,
    ) {
        let x = self.x;
        self.rmw_zp_indexed(cycle, bus, master, x, op);
    }

    pub(crate) fn rmw_zp_y<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
        op: impl FnOnce(&mut Self, u8) -> u8,
    ) {
        let y = self.y;
        self.rmw_zp_indexed(cycle, bus, master, y, op);
    }

    pub(crate) fn rmw_abs<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
        op: impl FnOnce(&mut Self, u8) -> u8,
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
                bus.write(master, self.temp_addr, self.temp_data);
                self.state = ExecState::Execute(self.opcode, 4);
            }
            4 => {
                let result = op(self, self.temp_data);
                bus.write(master, self.temp_addr, result);
                self.state = ExecState::Fetch;
            }
            _ => unreachable!(),
        }
    }

    fn rmw_abs_indexed<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
        index: u8,
        op: impl FnOnce(&mut Self, u8) -> u8,
    ) {
        match cycle {
            0 => {
                self.temp_addr = bus.read(master, self.pc) as u16;
                self.pc = self.pc.wrapping_add(1);
                self.state = ExecState::Execute(self.opcode, 1);
            }
            1 => {
                let base_hi = bus.read(master, self.pc) as u16;
                self.pc = self.pc.wrapping_add(1);
                let unfixed_lo = (self.temp_addr as u8).wrapping_add(index);
                self.temp_data = if (self.temp_addr as u8).checked_add(index).is_none() {
                    1
                } else {
                    0
                };
                self.temp_addr = (base_hi << 8) | unfixed_lo as u16;
                self.state = ExecState::Execute(self.opcode, 2);
            }
            2 => {
                let _ = bus.read(master, self.temp_addr);
                if self.temp_data != 0 {
                    self.temp_addr = self.temp_addr.wrapping_add(0x0100);
                }
                self.state = ExecState::Execute(self.opcode, 3);
            }
            3 => {
                self.temp_data = bus.read(master, self.temp_addr);
                self.state = ExecState::Execute(self.opcode, 4);
            }
            4 => {
                bus.write(master, self.temp_addr, self.temp_data);
                self.state = ExecState::Execute(self.opcode, 5);
            }
            5 => {
                let result = op(self, self.temp_data);
                bus.write(master, self.temp_addr, result);
                self.state = ExecState::Fetch;
            }
            _ => unreachable!(),
        }
    }

    pub(crate) fn rmw_abs_x<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
        op: impl FnOnce(&mut Self, u8) -> u8,
    ) {
        let x = self.x;
        self.rmw_abs_indexed(cycle, bus, master, x, op);
    }

    pub(crate) fn rmw_abs_y<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
        op: impl FnOnce(&mut Self, u8) -> u8,
    ) {
        let y = self.y;
        self.rmw_abs_indexed(cycle, bus, master, y, op);
    }

    pub(crate) fn rmw_ind_x<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
        op: impl FnOnce(&mut Self, u8) -> u8,
    ) {
        match cycle {
            0 => {
                self.temp_addr = bus.read(master, self.pc) as u16;
                self.pc = self.pc.wrapping_add(1);
                self.state = ExecState::Execute(self.opcode, 1);
            }
            1 => {
                let _ = bus.read(master, self.temp_addr);
                self.temp_addr = (self.temp_addr as u8).wrapping_add(self.x) as u16;
                self.state = ExecState::Execute(self.opcode, 2);
            }
            2 => {
                self.temp_data = bus.read(master, self.temp_addr);
                self.state = ExecState::Execute(self.opcode, 3);
            }
            3 => {
                let hi_ptr = (self.temp_addr as u8).wrapping_add(1) as u16;
                let hi = bus.read(master, hi_ptr);
                self.temp_addr = ((hi as u16) << 8) | self.temp_data as u16;
                self.state = ExecState::Execute(self.opcode, 4);
            }
            4 => {
                self.temp_data = bus.read(master, self.temp_addr);
                self.state = ExecState::Execute(self.opcode, 5);
            }
            5 => {
                bus.write(master, self.temp_addr, self.temp_data);
                self.state = ExecState::Execute(self.opcode, 6);
            }
            6 => {
                let result = op(self, self.temp_data);
                bus.write(master, self.temp_addr, result);
                self.state = ExecState::Fetch;
            }
            _ => unreachable!(),
        }
    }

    pub(crate) fn rmw_ind_y<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
        op: impl FnOnce(&mut Self, u8) -> u8,
    ) {
        match cycle {
            0 => {
                self.temp_addr = bus.read(master, self.pc) as u16;
                self.pc = self.pc.wrapping_add(1);
                self.state = ExecState::Execute(self.opcode, 1);
            }
            1 => {
                self.temp_data = bus.read(master, self.temp_addr);
                self.state = ExecState::Execute(self.opcode, 2);
            }
            2 => {
                let ptr_hi = (self.temp_addr as u8).wrapping_add(1) as u16;
                let hi = bus.read(master, ptr_hi) as u16;
                let unfixed_lo = self.temp_data.wrapping_add(self.y);
                let crossed = self.temp_data.checked_add(self.y).is_none();
                self.temp_addr = (hi << 8) | unfixed_lo as u16;
                self.temp_data = crossed as u8;
                self.state = ExecState::Execute(self.opcode, 3);
            }
            3 => {
                let _ = bus.read(master, self.temp_addr);
                if self.temp_data != 0 {
                    self.temp_addr = self.temp_addr.wrapping_add(0x0100);
                }
                self.state = ExecState::Execute(self.opcode, 4);
            }
            4 => {
                self.temp_data = bus.read(master, self.temp_addr);
                self.state = ExecState::Execute(self.opcode, 5);
            }
            5 => {
                bus.write(master, self.temp_addr, self.temp_data);
                self.state = ExecState::Execute(self.opcode, 6);
            }
            6 => {
                let result = op(self, self.temp_data);
                bus.write(master, self.temp_addr, result);
                self.state = ExecState::Fetch;
            }
            _ => unreachable!(),
        }
    }
}
