use super::Mos6510;
use crate::core::{Bus, BusMaster};

impl Mos6510 {
    // ---- LDA ----
    pub(crate) fn op_lda_imm<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.alu_imm(cycle, bus, master, |cpu, v| {
            cpu.a = v;
            cpu.set_nz(v);
        });
    }
    pub(crate) fn op_lda_zp<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.alu_zp(cycle, bus, master, |cpu, v| {
            cpu.a = v;
            cpu.set_nz(v);
        });
    }
    pub(crate) fn op_lda_zp_x<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.alu_zp_x(cycle, bus, master, |cpu, v| {
            cpu.a = v;
            cpu.set_nz(v);
        });
    }
    pub(crate) fn op_lda_abs<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.alu_abs(cycle, bus, master, |cpu, v| {
            cpu.a = v;
            cpu.set_nz(v);
        });
    }
    pub(crate) fn op_lda_abs_x<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.alu_abs_x(cycle, bus, master, |cpu, v| {
            cpu.a = v;
            cpu.set_nz(v);
        });
    }
    pub(crate) fn op_lda_abs_y<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.alu_abs_y(cycle, bus, master, |cpu, v| {
            cpu.a = v;
            cpu.set_nz(v);
        });
    }
    pub(crate) fn op_lda_ind_x<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.alu_ind_x(cycle, bus, master, |cpu, v| {
            cpu.a = v;
            cpu.set_nz(v);
        });
    }
    pub(crate) fn op_lda_ind_y<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.alu_ind_y(cycle, bus, master, |cpu, v| {
            cpu.a = v;
            cpu.set_nz(v);
        });
    }

    // ---- LDX ----
    pub(crate) fn op_ldx_imm<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.alu_imm(cycle, bus, master, |cpu, v| {
            cpu.x = v;
            cpu.set_nz(v);
        });
    }
    pub(crate) fn op_ldx_zp<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.alu_zp(cycle, bus, master, |cpu, v| {
            cpu.x = v;
            cpu.set_nz(v);
        });
    }
    pub(crate) fn op_ldx_zp_y<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.alu_zp_y(cycle, bus, master, |cpu, v| {
            cpu.x = v;
            cpu.set_nz(v);
        });
    }
    pub(crate) fn op_ldx_abs<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.alu_abs(cycle, bus, master, |cpu, v| {
            cpu.x = v;
            cpu.set_nz(v);
        });
    }
    pub(crate) fn op_ldx_abs_y<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.alu_abs_y(cycle, bus, master, |cpu, v| {
            cpu.x = v;
            cpu.set_nz(v);
        });
    }

    // ---- LDY ----
    pub(crate) fn op_ldy_imm<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.alu_imm(cycle, bus, master, |cpu, v| {
            cpu.y = v;
            cpu.set_nz(v);
        });
    }
    pub(crate) fn op_ldy_zp<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.alu_zp(cycle, bus, master, |cpu, v| {
            cpu.y = v;
            cpu.set_nz(v);
        });
    }
    pub(crate) fn op_ldy_zp_x<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.alu_zp_x(cycle, bus, master, |cpu, v| {
            cpu.y = v;
            cpu.set_nz(v);
        });
    }
    pub(crate) fn op_ldy_abs<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.alu_abs(cycle, bus, master, |cpu, v| {
            cpu.y = v;
            cpu.set_nz(v);
        });
    }
    pub(crate) fn op_ldy_abs_x<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.alu_abs_x(cycle, bus, master, |cpu, v| {
            cpu.y = v;
            cpu.set_nz(v);
        });
    }

    // ---- STA ----
    pub(crate) fn op_sta_zp<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.store_zp(cycle, bus, master, self.a);
    }
    pub(crate) fn op_sta_zp_x<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.store_zp_x(cycle, bus, master, self.a);
    }
    pub(crate) fn op_sta_abs<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.store_abs(cycle, bus, master, self.a);
    }
    pub(crate) fn op_sta_abs_x<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.store_abs_x(cycle, bus, master, self.a);
    }
    pub(crate) fn op_sta_abs_y<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.store_abs_y(cycle, bus, master, self.a);
    }
    pub(crate) fn op_sta_ind_x<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.store_ind_x(cycle, bus, master, self.a);
    }
    pub(crate) fn op_sta_ind_y<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.store_ind_y(cycle, bus, master, self.a);
    }

    // ---- STX / STY ----
    pub(crate) fn op_stx_zp<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.store_zp(cycle, bus, master, self.x);
    }
    pub(crate) fn op_stx_zp_y<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.store_zp_y(cycle, bus, master, self.x);
    }
    pub(crate) fn op_stx_abs<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.store_abs(cycle, bus, master, self.x);
    }
    pub(crate) fn op_sty_zp<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.store_zp(cycle, bus, master, self.y);
    }
    pub(crate) fn op_sty_zp_x<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.store_zp_x(cycle, bus, master, self.y);
    }
    pub(crate) fn op_sty_abs<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self, cycle: u8, bus: &mut B, master: BusMaster,
    ) {
        self.store_abs(cycle, bus, master, self.y);
    }
}
