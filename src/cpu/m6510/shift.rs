use super::Mos6510;
use crate::core::{Bus, BusMaster};

impl Mos6510 {
    pub(crate) fn op_asl_zp<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.rmw_zp(cycle, bus, master, |cpu, v| cpu.perform_asl(v));
    }
    pub(crate) fn op_asl_zp_x<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.rmw_zp_x(cycle, bus, master, |cpu, v| cpu.perform_asl(v));
    }
    pub(crate) fn op_asl_abs<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.rmw_abs(cycle, bus, master, |cpu, v| cpu.perform_asl(v));
    }
    pub(crate) fn op_asl_abs_x<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.rmw_abs_x(cycle, bus, master, |cpu, v| cpu.perform_asl(v));
    }

    pub(crate) fn op_lsr_zp<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.rmw_zp(cycle, bus, master, |cpu, v| cpu.perform_lsr(v));
    }
    pub(crate) fn op_lsr_zp_x<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.rmw_zp_x(cycle, bus, master, |cpu, v| cpu.perform_lsr(v));
    }
    pub(crate) fn op_lsr_abs<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.rmw_abs(cycle, bus, master, |cpu, v| cpu.perform_lsr(v));
    }
    pub(crate) fn op_lsr_abs_x<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.rmw_abs_x(cycle, bus, master, |cpu, v| cpu.perform_lsr(v));
    }

    pub(crate) fn op_rol_zp<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.rmw_zp(cycle, bus, master, |cpu, v| cpu.perform_rol(v));
    }
    pub(crate) fn op_rol_zp_x<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.rmw_zp_x(cycle, bus, master, |cpu, v| cpu.perform_rol(v));
    }
    pub(crate) fn op_rol_abs<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.rmw_abs(cycle, bus, master, |cpu, v| cpu.perform_rol(v));
    }
    pub(crate) fn op_rol_abs_x<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.rmw_abs_x(cycle, bus, master, |cpu, v| cpu.perform_rol(v));
    }

    pub(crate) fn op_ror_zp<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.rmw_zp(cycle, bus, master, |cpu, v| cpu.perform_ror(v));
    }
    pub(crate) fn op_ror_zp_x<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.rmw_zp_x(cycle, bus, master, |cpu, v| cpu.perform_ror(v));
    }
    pub(crate) fn op_ror_abs<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.rmw_abs(cycle, bus, master, |cpu, v| cpu.perform_ror(v));
    }
    pub(crate) fn op_ror_abs_x<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.rmw_abs_x(cycle, bus, master, |cpu, v| cpu.perform_ror(v));
    }
}
