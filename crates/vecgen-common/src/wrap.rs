//! Boilerplate wrappers for generated test code.
//!
//! A raw test body only flips `resAcc[0]` on failure; these helpers add the
//! kernel submission scaffolding around it, wrap per-width bodies into test
//! functions and produce the matching call-site statements.

/// Name of the generated test function for one (test, type, width) tuple.
pub fn test_func_name(test_name: &str, type_name: &str, width: u32) -> String {
    format!("{test_name}_{type_name}_{width}")
}

/// Wrap a test body with queue submission and result-buffer scaffolding.
///
/// The body runs inside a `single_task` named by `kernel_name` and reports
/// through `resAcc[0]`; the wrapper checks the result on the host side.
pub fn wrap_with_kernel(kernel_name: &str, description: &str, body: &str) -> String {
    format!(
        r#"  {{
    INFO("{description}");
    auto testQueue = util::get_cts_object::queue();
    {{
      bool resArray[1] = {{true}};
      {{
        sycl::buffer<bool, 1> boolBuffer(resArray, sycl::range<1>(1));
        testQueue.submit([&](sycl::handler &cgh) {{
          auto resAcc = boolBuffer.get_access<sycl::access_mode::write>(cgh);
          cgh.single_task<class {kernel_name}>([=]() {{
{body}          }});
        }});
      }}
      if (!resArray[0]) {{
        FAIL(log, "{description} failed");
      }}
    }}
  }}
"#
    )
}

/// Wrap accumulated kernel blocks into a width-labeled test function.
pub fn wrap_with_test_func(test_name: &str, type_name: &str, body: &str, width: u32) -> String {
    format!(
        "void {func}(util::logger &log) {{\n{body}}}\n\n",
        func = test_func_name(test_name, type_name, width)
    )
}

/// Call-site statement invoking one generated test function.
pub fn make_func_call(test_name: &str, type_name: &str, width: u32) -> String {
    format!("  {}(log);\n", test_func_name(test_name, type_name, width))
}
