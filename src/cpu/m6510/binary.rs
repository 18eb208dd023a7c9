use super::Mos6510;
use crate::core::{Bus, BusMaster};

impl Mos6510 {
    // ---- ADC ----
    pub(crate) fn op_adc_imm<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.alu_imm(cycle, bus, master, |cpu, v| cpu.perform_adc(v));
    }
    pub(crate) fn op_adc_zp<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.alu_zp(cycle, bus, master, |cpu, v| cpu.perform_adc(v));
    }
    pub(crate) fn op_adc_zp_x<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.alu_zp_x(cycle, bus, master, |cpu, v| cpu.perform_adc(v));
    }
    pub(crate) fn op_adc_abs<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.alu_abs(cycle, bus, master, |cpu, v| cpu.perform_adc(v));
    }
    pub(crate) fn op_adc_abs_x<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.alu_abs_x(cycle, bus, master, |cpu, v| cpu.perform_adc(v));
    }
    pub(crate) fn op_adc_abs_y<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.alu_abs_y(cycle, bus, master, |cpu, v| cpu.perform_adc(v));
    }
    pub(crate) fn op_adc_ind_x<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.alu_ind_x(cycle, bus, master, |cpu, v| cpu.perform_adc(v));
    }
    pub(crate) fn op_adc_ind_y<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.alu_ind_y(cycle, bus, master, |cpu, v| cpu.perform_adc(v));
    }

    // ---- SBC ----
    pub(crate) fn op_sbc_imm<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.alu_imm(cycle, bus, master, |cpu, v| cpu.perform_sbc(v));
    }
    pub(crate) fn op_sbc_zp<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.alu_zp(cycle, bus, master, |cpu, v| cpu.perform_sbc(v));
    }
    pub(crate) fn op_sbc_zp_x<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.alu_zp_x(cycle, bus, master, |cpu, v| cpu.perform_sbc(v));
    }
    pub(crate) fn op_sbc_abs<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.alu_abs(cycle, bus, master, |cpu, v| cpu.perform_sbc(v));
    }
    pub(crate) fn op_sbc_abs_x<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.alu_abs_x(cycle, bus, master, |cpu, v| cpu.perform_sbc(v));
    }
    pub(crate) fn op_sbc_abs_y<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.alu_abs_y(cycle, bus, master, |cpu, v| cpu.perform_sbc(v));
    }
    pub(crate) fn op_sbc_ind_x<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.alu_ind_x(cycle, bus, master, |cpu, v| cpu.perform_sbc(v));
    }
    pub(crate) fn op_sbc_ind_y<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.alu_ind_y(cycle, bus, master, |cpu, v| cpu.perform_sbc(v));
    }

    // ---- CMP ----
    pub(crate) fn op_cmp_imm<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.alu_imm(cycle, bus, master, |cpu, v| {
            cpu.perform_compare(cpu.a, v)
        });
    }
    pub(crate) fn op_cmp_zp<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.alu_zp(cycle, bus, master, |cpu, v| cpu.perform_compare(cpu.a, v));
    }
    pub(crate) fn op_cmp_zp_x<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.alu_zp_x(cycle, bus, master, |cpu, v| cpu.perform_compare(cpu.a, v));
    }
    pub(crate) fn op_cmp_abs<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.alu_abs(cycle, bus, master, |cpu, v| cpu.perform_compare(cpu.a, v));
    }
    pub(crate) fn op_cmp_abs_x<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.alu_abs_x(cycle, bus, master, |cpu, v| cpu.perform_compare(cpu.a, v));
    }
    pub(crate) fn op_cmp_abs_y<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.alu_abs_y(cycle, bus, master, |cpu, v| cpu.perform_compare(cpu.a, v));
    }
    pub(crate) fn op_cmp_ind_x<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.alu_ind_x(cycle, bus, master, |cpu, v| cpu.perform_compare(cpu.a, v));
    }
    pub(crate) fn op_cmp_ind_y<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.alu_ind_y(cycle, bus, master, |cpu, v| cpu.perform_compare(cpu.a, v));
    }

    // ---- AND ----
    pub(crate) fn op_and_imm<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.alu_imm(cycle, bus, master, |cpu, v| cpu.perform_and(v));
    }
    pub(crate) fn op_and_zp<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.alu_zp(cycle, bus, master, |cpu, v| cpu.perform_and(v));
    }
    pub(crate) fn op_and_zp_x<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.alu_zp_x(cycle, bus, master, |cpu, v| cpu.perform_and(v));
    }
    pub(crate) fn op_and_abs<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.alu_abs(cycle, bus, master, |cpu, v| cpu.perform_and(v));
    }
    pub(crate) fn op_and_abs_x<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.alu_abs_x(cycle, bus, master, |cpu, v| cpu.perform_and(v));
    }
    pub(crate) fn op_and_abs_y<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.alu_abs_y(cycle, bus, master, |cpu, v| cpu.perform_and(v));
    }
    pub(crate) fn op_and_ind_x<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.alu_ind_x(cycle, bus, master, |cpu, v| cpu.perform_and(v));
    }
    pub(crate) fn op_and_ind_y<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.alu_ind_y(cycle, bus, master, |cpu, v| cpu.perform_and(v));
    }

    // ---- ORA ----
    pub(crate) fn op_ora_imm<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.alu_imm(cycle, bus, master, |cpu, v| cpu.perform_ora(v));
    }
    pub(crate) fn op_ora_zp<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.alu_zp(cycle, bus, master, |cpu, v| cpu.perform_ora(v));
    }
    pub(crate) fn op_ora_zp_x<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.alu_zp_x(cycle, bus, master, |cpu, v| cpu.perform_ora(v));
    }
    pub(crate) fn op_ora_abs<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.alu_abs(cycle, bus, master, |cpu, v| cpu.perform_ora(v));
    }
    pub(crate) fn op_ora_abs_x<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.alu_abs_x(cycle, bus, master, |cpu, v| cpu.perform_ora(v));
    }
    pub(crate) fn op_ora_abs_y<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.alu_abs_y(cycle, bus, master, |cpu, v| cpu.perform_ora(v));
    }
    pub(crate) fn op_ora_ind_x<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.alu_ind_x(cycle, bus, master, |cpu, v| cpu.perform_ora(v));
    }
    pub(crate) fn op_ora_ind_y<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.alu_ind_y(cycle, bus, master, |cpu, v| cpu.perform_ora(v));
    }

    // ---- EOR ----
    pub(crate) fn op_eor_imm<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.alu_imm(cycle, bus, master, |cpu, v| cpu.perform_eor(v));
    }
    pub(crate) fn op_eor_zp<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.alu_zp(cycle, bus, master, |cpu, v| cpu.perform_eor(v));
    }
    pub(crate) fn op_eor_zp_x<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.alu_zp_x(cycle, bus, master, |cpu, v| cpu.perform_eor(v));
    }
    pub(crate) fn op_eor_abs<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.alu_abs(cycle, bus, master, |cpu, v| cpu.perform_eor(v));
    }
    pub(crate) fn op_eor_abs_x<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.alu_abs_x(cycle, bus, master, |cpu, v| cpu.perform_eor(v));
    }
    pub(crate) fn op_eor_abs_y<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.alu_abs_y(cycle, bus, master, |cpu, v| cpu.perform_eor(v));
    }
    pub(crate) fn op_eor_ind_x<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.alu_ind_x(cycle, bus, master, |cpu, v| cpu.perform_eor(v));
    }
    pub(crate) fn op_eor_ind_y<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.alu_ind_y(cycle, bus, master, |cpu, v| cpu.perform_eor(v));
    }

    // ---- BIT ----
    pub(crate) fn op_bit_zp<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.alu_zp(cycle, bus, master, |cpu, v| cpu.perform_bit(v));
    }
    pub(crate) fn op_bit_abs<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.alu_abs(cycle, bus, master, |cpu, v| cpu.perform_bit(v));
    }

    // ---- CPX / CPY ----
    pub(crate) fn op_cpx_imm<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.alu_imm(cycle, bus, master, |cpu, v| cpu.perform_compare(cpu.x, v));
    }
    pub(crate) fn op_cpx_zp<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.alu_zp(cycle, bus, master, |cpu, v| cpu.perform_compare(cpu.x, v));
    }
    pub(crate) fn op_cpx_abs<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.alu_abs(cycle, bus, master, |cpu, v| cpu.perform_compare(cpu.x, v));
    }
    pub(crate) fn op_cpy_imm<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.alu_imm(cycle, bus, master, |cpu, v| cpu.perform_compare(cpu.y, v));
    }
    pub(crate) fn op_cpy_zp<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.alu_zp(cycle, bus, master, |cpu, v| cpu.perform_compare(cpu.y, v));
    }
    pub(crate) fn op_cpy_abs<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.alu_abs(cycle, bus, master, |cpu, v| cpu.perform_compare(cpu.y, v));
    }
}
