//! Module operation: print every section of a new module.

use stone_codegen::{Acknowledge, EntityName, ModelSource, Result, Sequencer};
use stone_schema::Config;

use crate::reports::{ModuleReport, Output, Report, SectionReport};

/// Run the ten stages for `name`, rendering each section to `out` and
/// waiting on `ack` in between.
pub fn generate<M: ModelSource>(
    name: &EntityName,
    config: &Config,
    model: M,
    ack: &mut dyn Acknowledge,
    out: &mut dyn Output,
) -> Result<ModuleReport> {
    let mut sequencer = Sequencer::new(name, config, model);
    let mut sections = 0;

    sequencer.run(ack, |stage, section| {
        SectionReport { stage, section }.render(out);
        sections += 1;
    })?;

    let (type_name, leaves) = sequencer
        .entity()
        .map(|entity| (entity.type_name.clone(), entity.leaf_count()))
        .unwrap_or_default();

    Ok(ModuleReport {
        module: name.kebab().to_string(),
        type_name,
        sections,
        leaves,
    })
}

#[cfg(test)]
mod tests {
    use stone_codegen::{Immediate, Stage};
    use stone_ir::{Entity, Field};

    use super::*;
    use crate::reports::RecordingOutput;

    #[test]
    fn test_generate_renders_every_stage() {
        let name = EntityName::parse("customer", None).unwrap();
        let config = Config::default();
        let entity = Entity::new("Customer", vec![Field::numeric("id"), Field::text("name")]);
        let mut out = RecordingOutput::default();

        let report = generate(&name, &config, entity, &mut Immediate, &mut out).unwrap();

        assert_eq!(report.sections, 10);
        assert_eq!(report.type_name, "Customer");
        assert_eq!(report.leaves, 2);
        let headings: Vec<_> = out.lines.iter().filter(|l| l.starts_with("# ")).collect();
        assert_eq!(headings.len(), 10);
        assert_eq!(headings[0], "# 1/10 Angular CLI : Module");
        assert_eq!(headings[9], "# 10/10 customer.service.ts");
    }

    #[test]
    fn test_generate_stops_on_failed_acknowledgment() {
        let name = EntityName::parse("customer", None).unwrap();
        let config = Config::default();
        let entity = Entity::new("Customer", vec![Field::text("name")]);
        let mut out = RecordingOutput::default();
        let mut ack = |_: Stage| -> std::io::Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::Interrupted, "ctrl-c"))
        };

        let err = generate(&name, &config, entity, &mut ack, &mut out).unwrap_err();

        assert!(matches!(*err, stone_codegen::Error::Acknowledge { stage: 1, .. }));
        assert_eq!(out.lines.iter().filter(|l| l.starts_with("# ")).count(), 1);
    }
}
