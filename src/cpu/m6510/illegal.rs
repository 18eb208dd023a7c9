use super::{ExecState, Mos6510};
use crate::core::{Bus, BusMaster};

/// Undocumented opcodes. Only the handful with known Lorenz-suite coverage
/// (LAX/SAX/DCP/ISC/SLO/RLA/SRE/RRA) get full semantics; the rest execute as
/// NOPs of the correct byte length and cycle count, and JAM/KIL opcodes fall
/// through to the catch-all NOP since no program relying on them is in scope.
impl Mos6510 {
    pub(crate) fn execute_illegal<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        opcode: u8,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
    ) {
        match opcode {
            // ---- LAX: load A and X simultaneously ----
            0xA7 => self.alu_zp(cycle, bus, master, |cpu, v| cpu.load_ax(v)),
            0xB7 => self.alu_zp_y(cycle, bus, master, |cpu, v| cpu.load_ax(v)),
            0xAF => self.alu_abs(cycle, bus, master, |cpu, v| cpu.load_ax(v)),
            0xBF => self.alu_abs_y(cycle, bus, master, |cpu, v| cpu.load_ax(v)),
            0xA3 => self.alu_ind_x(cycle, bus, master, |cpu, v| cpu.load_ax(v)),
            0xB3 => self.alu_ind_y(cycle, bus, master, |cpu, v| cpu.load_ax(v)),

            // ---- SAX: store A & X ----
            0x87 => self.store_zp(cycle, bus, master, self.a & self.x),
            0x97 => self.store_zp_y(cycle, bus, master, self.a & self.x),
            0x8F => self.store_abs(cycle, bus, master, self.a & self.x),
            0x83 => self.store_ind_x(cycle, bus, master, self.a & self.x),

            // ---- DCP: DEC then CMP ----
            0xC7 => self.rmw_zp(cycle, bus, master, |cpu, v| cpu.dcp(v)),
            0xD7 => self.rmw_zp_x(cycle, bus, master, |cpu, v| cpu.dcp(v)),
            0xCF => self.rmw_abs(cycle, bus, master, |cpu, v| cpu.dcp(v)),
            0xDF => self.rmw_abs_x(cycle, bus, master, |cpu, v| cpu.dcp(v)),
            0xDB => self.rmw_abs_y(cycle, bus, master, |cpu, v| cpu.dcp(v)),
            0xC3 => self.rmw_ind_x(cycle, bus, master, |cpu, v| cpu.dcp(v)),
            0xD3 => self.rmw_ind_y(cycle, bus, master, |cpu, v| cpu.dcp(v)),

            // ---- ISC: INC then SBC ----
            0xE7 => self.rmw_zp(cycle, bus, master, |cpu, v| cpu.isc(v)),
            0xF7 => self.rmw_zp_x(cycle, bus, master, |cpu, v| cpu.isc(v)),
            0xEF => self.rmw_abs(cycle, bus, master, |cpu, v| cpu.isc(v)),
            0xFF => self.rmw_abs_x(cycle, bus, master, |cpu, v| cpu.isc(v)),
            0xFB => self.rmw_abs_y(cycle, bus, master, |cpu, v| cpu.isc(v)),
            0xE3 => self.rmw_ind_x(cycle, bus, master, |cpu, v| cpu.isc(v)),
            0xF3 => self.rmw_ind_y(cycle, bus, master, |cpu, v| cpu.isc(v)),

            // ---- SLO: ASL then ORA ----
            0x07 => self.rmw_zp(cycle, bus, master, |cpu, v| cpu.slo(v)),
            0x17 => self.rmw_zp_x(cycle, bus, master, |cpu, v| cpu.slo(v)),
            0x0F => self.rmw_abs(cycle, bus, master, |cpu, v| cpu.slo(v)),
            0x1F => self.rmw_abs_x(cycle, bus, master, |cpu, v| cpu.slo(v)),
            0x1B => self.rmw_abs_y(cycle, bus, master, |cpu, v| cpu.slo(v)),
            0x03 => self.rmw_ind_x(cycle, bus, master, |cpu, v| cpu.slo(v)),
            0x13 => self.rmw_ind_y(cycle, bus, master, |cpu, v| cpu.slo(v)),

            // ---- RLA: ROL then AND ----
            0x27 => self.rmw_zp(cycle, bus, master, |cpu, v| cpu.rla(v)),
            0x37 => self.rmw_zp_x(cycle, bus, master, |cpu, v| cpu.rla(v)),
            0x2F => self.rmw_abs(cycle, bus, master, |cpu, v| cpu.rla(v)),
            0x3F => self.rmw_abs_x(cycle, bus, master, |cpu, v| cpu.rla(v)),
            0x3B => self.rmw_abs_y(cycle, bus, master, |cpu, v| cpu.rla(v)),
            0x23 => self.rmw_ind_x(cycle, bus, master, |cpu, v| cpu.rla(v)),
            0x33 => self.rmw_ind_y(cycle, bus, master, |cpu, v| cpu.rla(v)),

            // ---- SRE: LSR then EOR ----
            0x47 => self.rmw_zp(cycle, bus, master, |cpu, v| cpu.sre(v)),
            0x57 => self.rmw_zp_x(cycle, bus, master, |cpu, v| cpu.sre(v)),
            0x4F => self.rmw_abs(cycle, bus, master, |cpu, v| cpu.sre(v)),
            0x5F => self.rmw_abs_x(cycle, bus, master, |cpu, v| cpu.sre(v)),
            0x5B => self.rmw_abs_y(cycle, bus, master, |cpu, v| cpu.sre(v)),
            0x43 => self.rmw_ind_x(cycle, bus, master, |cpu, v| cpu.sre(v)),
            0x53 => self.rmw_ind_y(cycle, bus, master, |cpu, v| cpu.sre(v)),

            // ---- RRA: ROR then ADC ----
            0x67 => self.rmw_zp(cycle, bus, master, |cpu, v| cpu.rra(v)),
            0x77 => self.rmw_zp_x(cycle, bus, master, |cpu, v| cpu.rra(v)),
            0x6F => self.rmw_abs(cycle, bus, master, |cpu, v| cpu.rra(v)),
            0x7F => self.rmw_abs_x(cycle, bus, master, |cpu, v| cpu.rra(v)),
            0x7B => self.rmw_abs_y(cycle, bus, master, |cpu, v| cpu.rra(v)),
            0x63 => self.rmw_ind_x(cycle, bus, master, |cpu, v| cpu.rra(v)),
            0x73 => self.rmw_ind_y(cycle, bus, master, |cpu, v| cpu.rra(v)),

            // ---- SBC alias ----
            0xEB => self.op_sbc_imm(cycle, bus, master),

            // ---- 1-byte, 2-cycle implied NOPs ----
            0x1A | 0x3A | 0x5A | 0x7A | 0xDA | 0xFA => {
                if cycle == 0 {
                    self.state = ExecState::Fetch;
                }
            }

            // ---- 2-byte, 2-cycle immediate NOPs ----
            0x80 | 0x82 | 0x89 | 0xC2 | 0xE2 => {
                self.alu_imm(cycle, bus, master, |_, _| {});
            }

            // ---- 2-byte, 3-cycle zero-page NOPs ----
            0x04 | 0x44 | 0x64 => {
                self.alu_zp(cycle, bus, master, |_, _| {});
            }

            // ---- 2-byte, 4-cycle zero-page,X NOPs ----
            0x14 | 0x34 | 0x54 | 0x74 | 0xD4 | 0xF4 => {
                self.alu_zp_x(cycle, bus, master, |_, _| {});
            }

            // ---- 3-byte, 4-cycle absolute NOP ----
            0x0C => {
                self.alu_abs(cycle, bus, master, |_, _| {});
            }

            // ---- 3-byte, 4-or-5-cycle absolute,X NOPs ----
            0x1C | 0x3C | 0x5C | 0x7C | 0xDC | 0xFC => {
                self.alu_abs_x(cycle, bus, master, |_, _| {});
            }

            // ---- JAM/KIL and anything else: treat as a 1-cycle NOP ----
            _ => {
                self.state = ExecState::Fetch;
            }
        }
    }

    fn load_ax(&mut self, value: u8) {
        self.a = value;
        self.x = value;
        self.set_nz(value);
    }

    fn dcp(&mut self, value: u8) -> u8 {
        let result = value.wrapping_sub(1);
        self.perform_compare(self.a, result);
        result
    }

    fn isc(&mut self, value: u8) -> u8 {
        let result = value.wrapping_add(1);
        self.perform_sbc(result);
        result
    }

    fn slo(&mut self, value: u8) -> u8 {
        let result = self.perform_asl(value);
        self.perform_ora(result);
        result
    }

    fn rla(&mut self, value: u8) -> u8 {
        let result = self.perform_rol(value);
        self.perform_and(result);
        result
    }

    fn sre(&mut self, value: u8) -> u8 {
        let result = self.perform_lsr(value);
        self.perform_eor(result);
        result
    }

    fn rra(&mut self, value: u8) -> u8 {
        let result = self.perform_ror(value);
        self.perform_adc(result);
        result
    }
}
