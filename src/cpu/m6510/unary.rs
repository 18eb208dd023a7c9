use super::Mos6510;
use crate::core::{Bus, BusMaster};

impl Mos6510 {
    pub(crate) fn op_inc_zp<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.rmw_zp(cycle, bus, master, |cpu, v| {
            let r = v.wrapping_add(1);
            cpu.set_nz(r);
            r
        });
    }
    pub(crate) fn op_inc_zp_x<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.rmw_zp_x(cycle, bus, master, |cpu, v| {
            let r = v.wrapping_add(1);
            cpu.set_nz(r);
            r
        });
    }
    pub(crate) fn op_inc_abs<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.rmw_abs(cycle, bus, master, |cpu, v| {
            let r = v.wrapping_add(1);
            cpu.set_nz(r);
            r
        });
    }
    pub(crate) fn op_inc_abs_x<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.rmw_abs_x(cycle, bus, master, |cpu, v| {
            let r = v.wrapping_add(1);
            cpu.set_nz(r);
            r
        });
    }

    pub(crate) fn op_dec_zp<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.rmw_zp(cycle, bus, master, |cpu, v| {
            let r = v.wrapping_sub(1);
            cpu.set_nz(r);
            r
        });
    }
    pub(crate) fn op_dec_zp_x<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.rmw_zp_x(cycle, bus, master, |cpu, v| {
            let r = v.wrapping_sub(1);
            cpu.set_nz(r);
            r
        });
    }
    pub(crate) fn op_dec_abs<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.rmw_abs(cycle, bus, master, |cpu, v| {
            let r = v.wrapping_sub(1);
            cpu.set_nz(r);
            r
        });
    }
    pub(crate) fn op_dec_abs_x<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.rmw_abs_x(cycle, bus, master, |cpu, v| {
            let r = v.wrapping_sub(1);
            cpu.set_nz(r);
            r
        });
    }
}
