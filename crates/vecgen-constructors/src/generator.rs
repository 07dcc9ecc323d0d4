//! Constructor test combination generator.

use std::fs;
use std::path::Path;

use tracing::info;
use vecgen_common::{GenError, ScalarType, TypeTable, emit, wrap};

use crate::templates;

/// Test name embedded in generated function and kernel symbols.
pub const TEST_NAME: &str = "CONSTRUCTORS";

/// Renders one constructor test per (width, variant) combination for a
/// single scalar type and merges the result with a code template.
pub struct ConstructorGenerator {
    table: TypeTable,
}

impl ConstructorGenerator {
    pub fn new(table: TypeTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &TypeTable {
        &self.table
    }

    fn lookup(&self, type_name: &str) -> Result<&ScalarType, GenError> {
        self.table
            .find(type_name)
            .ok_or_else(|| GenError::UnknownType(type_name.to_string()))
    }

    /// The default value replicated `width` times, comma separated.
    fn broadcast_values(ty: &ScalarType, width: u32) -> String {
        vec![ty.default.as_str(); width as usize].join(", ")
    }

    /// Generates the test for `vec()`.
    pub fn generate_default(&self, ty: &ScalarType, width: u32) -> String {
        let body = templates::default_block(&ty.cxx, width);
        wrap::wrap_with_kernel(
            &format!("VEC_DEFAULT_CONSTRUCTOR_KERNEL_{}{}", ty.name, width),
            &format!("Default constructor, sycl::vec<{}, {}>", ty.cxx, width),
            &body,
        )
    }

    /// Generates the test for `vec(const T &arg)`.
    pub fn generate_explicit(&self, ty: &ScalarType, width: u32) -> String {
        let body = templates::explicit_block(
            &ty.cxx,
            width,
            &ty.default,
            &Self::broadcast_values(ty, width),
        );
        wrap::wrap_with_kernel(
            &format!("VEC_EXPLICIT_CONSTRUCTOR_KERNEL_{}{}", ty.name, width),
            &format!("Explicit constructor, sycl::vec<{}, {}>", ty.cxx, width),
            &body,
        )
    }

    /// Generates the test for `vec<T, dims>(const &vec<T, dims>)`.
    pub fn generate_vec(&self, ty: &ScalarType, width: u32) -> String {
        let body = templates::vec_copy_block(
            &ty.cxx,
            width,
            &ty.default,
            &Self::broadcast_values(ty, width),
        );
        wrap::wrap_with_kernel(
            &format!("VEC_VEC_CONSTRUCTOR_KERNEL_{}{}", ty.name, width),
            &format!("const &vec constructor, sycl::vec<{}, {}>", ty.cxx, width),
            &body,
        )
    }

    /// Generates the test for `vec(vector_t)`.
    ///
    /// Interop construction only compiles on device builds, so the whole
    /// block is guarded for device-only compilation.
    pub fn generate_opencl(&self, ty: &ScalarType, width: u32) -> String {
        let body = templates::interop_block(&ty.cxx, width);
        let kernel = wrap::wrap_with_kernel(
            &format!("VEC_OPENCL_CONSTRUCTOR_KERNEL_{}{}", ty.name, width),
            &format!("vec(vector_t openclVector), sycl::vec<{}, {}>", ty.cxx, width),
            &body,
        );
        format!("#ifdef __SYCL_DEVICE_ONLY__\n{kernel}#endif  // __SYCL_DEVICE_ONLY__\n")
    }

    /// Accumulated test functions and call-site statements, one pair of
    /// entries per supported width.
    fn render_parts(&self, ty: &ScalarType) -> (String, String) {
        let mut test_funcs = String::new();
        let mut func_calls = String::new();
        for &width in self.table.widths() {
            let mut body = String::new();
            body.push_str(&self.generate_default(ty, width));
            body.push_str(&self.generate_explicit(ty, width));
            body.push_str(&self.generate_vec(ty, width));
            // generate_opencl is deliberately not emitted here: the interop
            // tests need a device-only build configuration that the suite
            // does not run yet.
            test_funcs.push_str(&wrap::wrap_with_test_func(TEST_NAME, &ty.name, &body, width));
            func_calls.push_str(&wrap::make_func_call(TEST_NAME, &ty.name, width));
        }
        (test_funcs, func_calls)
    }

    /// Render the complete artifact text for one type: template content,
    /// then test functions, then call sites.
    pub fn render_source(&self, type_name: &str, template: &str) -> Result<String, GenError> {
        let ty = self.lookup(type_name)?;
        let (test_funcs, func_calls) = self.render_parts(ty);
        Ok(emit::merge_source(template, &test_funcs, &func_calls))
    }

    /// Read the template, render every (width, variant) combination for
    /// `type_name` and write the merged artifact to `output_file`.
    pub fn generate_constructor_tests(
        &self,
        type_name: &str,
        input_file: &Path,
        output_file: &Path,
    ) -> Result<(), GenError> {
        let ty = self.lookup(type_name)?;
        let template = fs::read_to_string(input_file)?;
        let (test_funcs, func_calls) = self.render_parts(ty);
        emit::write_source_file(output_file, &template, &test_funcs, &func_calls)?;
        info!(
            "Generated {} constructor tests for {} ({} widths)",
            TEST_NAME,
            ty.name,
            self.table.widths().len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn test_table() -> TypeTable {
        TypeTable {
            widths: vec![1, 2, 4],
            scalar: vec![ScalarType {
                name: "int".to_string(),
                cxx: "int".to_string(),
                default: "1".to_string(),
            }],
        }
    }

    fn generator() -> ConstructorGenerator {
        ConstructorGenerator::new(test_table())
    }

    fn int_type(generator: &ConstructorGenerator) -> ScalarType {
        generator.table().find("int").unwrap().clone()
    }

    #[test]
    fn test_default_has_type_and_size_checks_only() {
        let g = generator();
        let ty = int_type(&g);
        let block = g.generate_default(&ty, 4);

        assert_eq!(block.matches("check_equal_type_bool").count(), 1);
        assert_eq!(block.matches("check_vector_size").count(), 1);
        assert_eq!(block.matches("check_vector_values").count(), 0);
        assert!(block.contains("VEC_DEFAULT_CONSTRUCTOR_KERNEL_int4"));
    }

    #[test]
    fn test_explicit_broadcasts_default_value() {
        let g = generator();
        let ty = int_type(&g);
        let block = g.generate_explicit(&ty, 4);

        assert_eq!(block.matches("check_equal_type_bool").count(), 1);
        assert_eq!(block.matches("check_vector_size").count(), 1);
        assert_eq!(block.matches("check_vector_values").count(), 1);
        assert!(block.contains("const int val = 1;"));
        assert!(block.contains("int vals[] = {1, 1, 1, 1};"));
        assert!(block.contains("sycl::vec<int, 4>(val)"));
    }

    #[test]
    fn test_explicit_value_arity_matches_width() {
        let g = generator();
        let ty = int_type(&g);
        for &width in g.table().widths() {
            let block = g.generate_explicit(&ty, width);
            let vals = block
                .lines()
                .find(|line| line.contains("vals[] = {"))
                .expect("no expected-value array");
            let count = vals
                .trim_start()
                .trim_start_matches("int vals[] = {")
                .trim_end_matches("};")
                .split(", ")
                .count();
            assert_eq!(count as u32, width);
        }
    }

    #[test]
    fn test_vec_copy_matches_explicit_assertions() {
        let g = generator();
        let ty = int_type(&g);
        let block = g.generate_vec(&ty, 2);

        assert_eq!(block.matches("check_equal_type_bool").count(), 1);
        assert_eq!(block.matches("check_vector_size").count(), 1);
        assert_eq!(block.matches("check_vector_values").count(), 1);
        assert!(block.contains("sycl::vec<int, 2>(1)"));
        assert!(block.contains("VEC_VEC_CONSTRUCTOR_KERNEL_int2"));
    }

    #[test]
    fn test_opencl_is_device_guarded() {
        let g = generator();
        let ty = int_type(&g);
        let block = g.generate_opencl(&ty, 4);

        assert!(block.starts_with("#ifdef __SYCL_DEVICE_ONLY__\n"));
        assert!(block.ends_with("#endif  // __SYCL_DEVICE_ONLY__\n"));
        assert!(block.contains("VEC_OPENCL_CONSTRUCTOR_KERNEL_int4"));
        assert_eq!(block.matches("check_vector_values").count(), 0);
    }

    #[test]
    fn test_kernel_names_distinct_across_combinations() {
        let g = generator();
        let ty = int_type(&g);
        let mut names = HashSet::new();
        let mut count = 0;

        for &width in g.table().widths() {
            for block in [
                g.generate_default(&ty, width),
                g.generate_explicit(&ty, width),
                g.generate_vec(&ty, width),
                g.generate_opencl(&ty, width),
            ] {
                let name = block
                    .lines()
                    .find(|line| line.contains("single_task<class "))
                    .and_then(|line| {
                        line.split("single_task<class ").nth(1)?.split('>').next()
                    })
                    .expect("no kernel name")
                    .to_string();
                names.insert(name);
                count += 1;
            }
        }
        assert_eq!(names.len(), count, "Kernel names must be pairwise distinct");
    }

    #[test]
    fn test_render_source_contains_template_verbatim() {
        let g = generator();
        let template = "// header\n#include \"common.h\"\n";
        let source = g.render_source("int", template).unwrap();

        assert!(source.starts_with(template));
    }

    #[test]
    fn test_render_source_one_call_per_width() {
        let g = generator();
        let source = g.render_source("int", "").unwrap();

        assert_eq!(source.matches("(log);").count(), g.table().widths().len());
        for &width in g.table().widths() {
            assert!(source.contains(&format!("void CONSTRUCTORS_int_{width}(util::logger &log)")));
            assert!(source.contains(&format!("  CONSTRUCTORS_int_{width}(log);")));
        }
    }

    #[test]
    fn test_render_source_widths_in_ascending_order() {
        let g = generator();
        let source = g.render_source("int", "").unwrap();

        let positions: Vec<_> = g
            .table()
            .widths()
            .iter()
            .map(|w| {
                source
                    .find(&format!("void CONSTRUCTORS_int_{w}("))
                    .expect("missing test function")
            })
            .collect();
        assert!(positions.windows(2).all(|p| p[0] < p[1]));
    }

    #[test]
    fn test_render_source_omits_interop_kernels() {
        let g = generator();
        let source = g.render_source("int", "").unwrap();

        assert!(!source.contains("VEC_OPENCL_CONSTRUCTOR_KERNEL"));
        assert!(!source.contains("__SYCL_DEVICE_ONLY__"));
    }

    #[test]
    fn test_render_source_is_deterministic() {
        let g = generator();
        let template = "// template\n";

        let first = g.render_source("int", template).unwrap();
        let second = g.render_source("int", template).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unknown_type_is_a_lookup_error() {
        let g = generator();
        let err = g.render_source("quaternion", "").unwrap_err();

        assert!(matches!(err, GenError::UnknownType(name) if name == "quaternion"));
    }
}
