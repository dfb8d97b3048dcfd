//! Suction, discharge and piston-leakage mass-flow closures.

use std::f64::consts::PI;

use tracing::trace;
use uom::{
    ConstZero,
    si::{
        area::square_meter,
        f64::{Area, MassRate},
    },
};

use crate::support::thermo::State;

use super::{
    Recip, RecipError,
    nozzle::{NozzleThermo, is_open, isentropic_nozzle},
};

/// Supplies an effective flow area, typically from a valve model.
///
/// `Context` is whatever the area source needs to evaluate itself, such as a
/// crank angle or a valve lift. `port` is the geometric port area from the
/// last pre-solve. Any `Fn(&Context) -> Area` is a source that ignores it.
pub trait FlowAreaSource<Context: ?Sized> {
    fn flow_area(&self, context: &Context, port: Area) -> Area;
}

/// A valve that always exposes the same area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedArea(pub Area);

impl<Context: ?Sized> FlowAreaSource<Context> for FixedArea {
    fn flow_area(&self, _context: &Context, _port: Area) -> Area {
        self.0
    }
}

/// A valve that is always fully open to its port.
///
/// Follows the port diameter through [`Recip::set_geometry`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PortArea;

impl<Context: ?Sized> FlowAreaSource<Context> for PortArea {
    fn flow_area(&self, _context: &Context, port: Area) -> Area {
        port
    }
}

impl<Context: ?Sized, F> FlowAreaSource<Context> for F
where
    F: Fn(&Context) -> Area,
{
    fn flow_area(&self, context: &Context, _port: Area) -> Area {
        self(context)
    }
}

/// A flow connection between two control volumes.
///
/// The closures write the effective area they used into `area`.
#[derive(Debug, Clone)]
pub struct FlowPath<'a, Fluid> {
    pub key_up: &'a str,
    pub key_down: &'a str,
    pub state_up: &'a State<Fluid>,
    pub state_down: &'a State<Fluid>,
    pub area: Area,
}

impl<'a, Fluid> FlowPath<'a, Fluid> {
    /// Creates a path with zero recorded area.
    #[must_use]
    pub fn new(
        key_up: &'a str,
        state_up: &'a State<Fluid>,
        key_down: &'a str,
        state_down: &'a State<Fluid>,
    ) -> Self {
        Self {
            key_up,
            key_down,
            state_up,
            state_down,
            area: Area::ZERO,
        }
    }
}

impl<Suction, Discharge> Recip<Suction, Discharge> {
    /// Suction valve mass flow along `path`.
    ///
    /// Flow that would leave the chamber through the suction valve is
    /// suppressed: the result is zero whenever the upstream key is the chamber.
    ///
    /// # Errors
    ///
    /// Propagates property failures from [`isentropic_nozzle`].
    pub fn suction<Fluid, Context: ?Sized>(
        &self,
        path: &mut FlowPath<'_, Fluid>,
        context: &Context,
        thermo: &impl NozzleThermo<Fluid>,
    ) -> Result<MassRate, RecipError>
    where
        Suction: FlowAreaSource<Context>,
    {
        if path.key_up == self.chamber_key() {
            return Ok(MassRate::ZERO);
        }
        path.area = self
            .suction_valve()
            .flow_area(context, self.derived().suction_port_area);
        nozzle_flow("suction", path, thermo)
    }

    /// Discharge valve mass flow along `path`.
    ///
    /// The result is zero whenever the downstream key is the chamber.
    ///
    /// # Errors
    ///
    /// Propagates property failures from [`isentropic_nozzle`].
    pub fn discharge<Fluid, Context: ?Sized>(
        &self,
        path: &mut FlowPath<'_, Fluid>,
        context: &Context,
        thermo: &impl NozzleThermo<Fluid>,
    ) -> Result<MassRate, RecipError>
    where
        Discharge: FlowAreaSource<Context>,
    {
        if path.key_down == self.chamber_key() {
            return Ok(MassRate::ZERO);
        }
        path.area = self
            .discharge_valve()
            .flow_area(context, self.derived().discharge_port_area);
        nozzle_flow("discharge", path, thermo)
    }

    /// Blow-by through the annular gap between piston and cylinder.
    ///
    /// The leakage area is `π·D_piston·δ_gap`.
    ///
    /// # Errors
    ///
    /// Propagates property failures from [`isentropic_nozzle`].
    pub fn piston_leakage<Fluid>(
        &self,
        path: &mut FlowPath<'_, Fluid>,
        thermo: &impl NozzleThermo<Fluid>,
    ) -> Result<MassRate, RecipError> {
        path.area = self.geometry().piston_diameter() * self.geometry().piston_gap() * PI;
        nozzle_flow("piston leakage", path, thermo)
    }
}

fn nozzle_flow<Fluid>(
    label: &'static str,
    path: &FlowPath<'_, Fluid>,
    thermo: &impl NozzleThermo<Fluid>,
) -> Result<MassRate, RecipError> {
    if !is_open(path.area) {
        trace!(
            path = label,
            from = path.key_up,
            to = path.key_down,
            area_m2 = path.area.get::<square_meter>(),
            "flow area closed, no flow"
        );
        return Ok(MassRate::ZERO);
    }
    isentropic_nozzle(path.area, path.state_up, path.state_down, thermo)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use uom::si::{
        angle::radian,
        f64::{Angle, Length},
        length::meter,
        mass_rate::kilogram_per_second,
    };

    use crate::models::compression::recip::core::{
        Dimensions,
        test_support::{TestGas, dimensions, gas_state, operating, recip},
    };

    #[test]
    fn suction_into_chamber_uses_valve_area() {
        let machine = recip();
        let thermo = TestGas::new();
        let inlet = gas_state(300.0, 120.0);
        let chamber = gas_state(300.0, 100.0);

        let mut path = FlowPath::new("inlet", &inlet, "A", &chamber);
        let m_dot = machine.suction(&mut path, &(), &thermo).unwrap();

        let port = machine.derived().suction_port_area;
        assert_eq!(path.area, port);
        let expected = isentropic_nozzle(port, &inlet, &chamber, &thermo).unwrap();
        assert_relative_eq!(
            m_dot.get::<kilogram_per_second>(),
            expected.get::<kilogram_per_second>()
        );
        assert!(m_dot > MassRate::ZERO);
    }

    #[test]
    fn suction_out_of_chamber_is_suppressed() {
        let machine = recip();
        let thermo = TestGas::new();
        let chamber = gas_state(300.0, 300.0);
        let inlet = gas_state(300.0, 100.0);

        let mut path = FlowPath::new("A", &chamber, "inlet", &inlet);
        assert_eq!(
            machine.suction(&mut path, &(), &thermo).unwrap(),
            MassRate::ZERO
        );
        assert_eq!(path.area, Area::ZERO);
    }

    #[test]
    fn discharge_into_chamber_is_suppressed() {
        let machine = recip();
        let thermo = TestGas::new();
        let outlet = gas_state(350.0, 900.0);
        let chamber = gas_state(300.0, 400.0);

        let mut path = FlowPath::new("outlet", &outlet, "A", &chamber);
        assert_eq!(
            machine.discharge(&mut path, &(), &thermo).unwrap(),
            MassRate::ZERO
        );
    }

    #[test]
    fn discharge_out_of_chamber_uses_valve_area() {
        let machine = recip();
        let thermo = TestGas::new();
        let chamber = gas_state(380.0, 900.0);
        let outlet = gas_state(350.0, 800.0);

        let mut path = FlowPath::new("A", &chamber, "outlet", &outlet);
        let m_dot = machine.discharge(&mut path, &(), &thermo).unwrap();

        assert_eq!(path.area, machine.derived().discharge_port_area);
        assert!(m_dot > MassRate::ZERO);
    }

    #[test]
    fn closed_valve_records_area_and_returns_zero() {
        let closed = |_: &Angle| Area::ZERO;
        let machine = Recip::new(dimensions(), operating(), closed, closed).unwrap();
        let thermo = TestGas::new();
        let inlet = gas_state(300.0, 200.0);
        let chamber = gas_state(300.0, 100.0);

        let mut path = FlowPath::new("inlet", &inlet, "A", &chamber);
        let theta = Angle::new::<radian>(1.0);
        assert_eq!(
            machine.suction(&mut path, &theta, &thermo).unwrap(),
            MassRate::ZERO
        );
        assert_eq!(path.area, Area::ZERO);
    }

    #[test]
    fn valve_area_can_depend_on_context() {
        let lift = |theta: &Angle| {
            Area::new::<square_meter>(1e-5 * theta.get::<radian>().sin().max(0.0))
        };
        let machine = Recip::new(dimensions(), operating(), lift, FixedArea(Area::ZERO)).unwrap();
        let thermo = TestGas::new();
        let inlet = gas_state(300.0, 200.0);
        let chamber = gas_state(300.0, 100.0);

        let mut path = FlowPath::new("inlet", &inlet, "A", &chamber);
        machine
            .suction(&mut path, &Angle::new::<radian>(PI / 2.0), &thermo)
            .unwrap();
        assert_relative_eq!(path.area.get::<square_meter>(), 1e-5);
    }

    #[test]
    fn port_valves_follow_set_geometry() {
        let mut machine = recip();
        machine
            .set_geometry(Dimensions {
                suction_port_diameter: Length::new::<meter>(0.02),
                discharge_port_diameter: Length::new::<meter>(0.012),
                ..dimensions()
            })
            .unwrap();
        let thermo = TestGas::new();
        let inlet = gas_state(300.0, 120.0);
        let chamber = gas_state(300.0, 100.0);
        let outlet = gas_state(300.0, 90.0);

        let mut path = FlowPath::new("inlet", &inlet, "A", &chamber);
        machine.suction(&mut path, &(), &thermo).unwrap();
        assert_eq!(path.area, machine.derived().suction_port_area);
        assert_relative_eq!(path.area.get::<square_meter>(), PI * 0.02_f64.powi(2) / 4.0);

        let mut path = FlowPath::new("A", &chamber, "outlet", &outlet);
        machine.discharge(&mut path, &(), &thermo).unwrap();
        assert_relative_eq!(path.area.get::<square_meter>(), PI * 0.012_f64.powi(2) / 4.0);
    }

    #[test]
    fn fixed_area_ignores_port_size() {
        let valve = FixedArea(Area::new::<square_meter>(2e-5));
        let port = Area::new::<square_meter>(1e-4);
        assert_eq!(FlowAreaSource::<()>::flow_area(&valve, &(), port), valve.0);
        assert_eq!(FlowAreaSource::<()>::flow_area(&PortArea, &(), port), port);
    }

    #[test]
    fn leakage_area_is_gap_annulus() {
        let machine = recip();
        let thermo = TestGas::new();
        let chamber = gas_state(400.0, 800.0);
        let shell = gas_state(300.0, 100.0);

        let mut path = FlowPath::new("A", &chamber, "shell", &shell);
        let m_dot = machine.piston_leakage(&mut path, &thermo).unwrap();

        assert_relative_eq!(path.area.get::<square_meter>(), PI * 0.03 * 1e-5);
        assert!(m_dot > MassRate::ZERO);
    }

    #[test]
    fn vanishing_gap_leaks_nothing() {
        let dims = Dimensions {
            piston_gap: Length::new::<meter>(1e-14),
            ..dimensions()
        };
        let machine = Recip::with_port_valves(dims, operating()).unwrap();
        let thermo = TestGas::new();
        let chamber = gas_state(400.0, 800.0);
        let shell = gas_state(300.0, 100.0);

        let mut path = FlowPath::new("A", &chamber, "shell", &shell);
        assert_eq!(
            machine.piston_leakage(&mut path, &thermo).unwrap(),
            MassRate::ZERO
        );
    }

    proptest! {
        #[test]
        fn chamber_never_feeds_suction_or_receives_discharge(
            t_chamber in 250.0_f64..600.0,
            p_chamber in 50.0_f64..3000.0,
            t_line in 250.0_f64..600.0,
            p_line in 50.0_f64..3000.0,
        ) {
            let machine = recip();
            let thermo = TestGas::new();
            let chamber = gas_state(t_chamber, p_chamber);
            let line = gas_state(t_line, p_line);

            let mut out = FlowPath::new("A", &chamber, "inlet", &line);
            prop_assert_eq!(machine.suction(&mut out, &(), &thermo).unwrap(), MassRate::ZERO);

            let mut back = FlowPath::new("outlet", &line, "A", &chamber);
            prop_assert_eq!(machine.discharge(&mut back, &(), &thermo).unwrap(), MassRate::ZERO);
        }
    }
}
