//! Common registry and type fixtures for tests.

use beanref::metadata::StaticTypeProvider;
use beanref::syntax::MemoryDocument;
use beanref::{ClassDescriptor, MethodDescriptor, ReturnKind};

pub const BEANS_NS: &str = "http://www.springframework.org/schema/beans";
pub const P_NS: &str = "http://www.springframework.org/schema/p";

/// `com.x.Foo` and `com.x.Bar` with the members the tests poke at.
///
/// `Foo` has constructors of arity 1 and 2, a `name` property, lifecycle
/// methods and a `make()` factory returning `Bar`.
pub fn sample_types() -> StaticTypeProvider {
    StaticTypeProvider::new()
        .with_type(
            ClassDescriptor::new("com.x.Foo")
                .with_method(MethodDescriptor::constructor("Foo", ["first"]))
                .with_method(MethodDescriptor::constructor("Foo", ["first", "second"]))
                .with_method(MethodDescriptor::setter("setName", "name"))
                .with_method(MethodDescriptor::setter("setNative", "value").private())
                .with_method(MethodDescriptor::new("init", ReturnKind::Void))
                .with_method(MethodDescriptor::new("dispose", ReturnKind::Void))
                .with_method(MethodDescriptor::new("make", ReturnKind::class("com.x.Bar")))
                .with_method(MethodDescriptor::new("count", ReturnKind::Value)),
        )
        .with_type(
            ClassDescriptor::new("com.x.Bar")
                .with_method(MethodDescriptor::setter("setLabel", "label"))
                .with_method(MethodDescriptor::new("close", ReturnKind::Void)),
        )
}

/// A registry document exercising every inference branch.
///
/// ```xml
/// <beans>
///   <bean id="a" name="alpha" class="com.x.Foo" init-method="init" p:name="n">
///     <constructor-arg name="second"/>
///     <constructor-arg name="first"/>
///     <property name="name" ref="x"/>
///   </bean>
///   <bean id="b" factory-bean="a" factory-method="make" destroy-method="close"/>
///   <bean id="c" parent="b"/>
///   <bean id="abstract"/>
///   <alias name="a" alias="x"/>
///   <alias name="x" alias="y"/>
/// </beans>
/// ```
pub fn registry_document() -> MemoryDocument {
    MemoryDocument::builder(BEANS_NS)
        .open("beans")
        .open("bean")
        .attr("id", "a")
        .attr("name", "alpha")
        .attr("class", "com.x.Foo")
        .attr("init-method", "init")
        .attr_ns(P_NS, "name", "n")
        .open("constructor-arg")
        .attr("name", "second")
        .close()
        .open("constructor-arg")
        .attr("name", "first")
        .close()
        .open("property")
        .attr("name", "name")
        .attr("ref", "x")
        .close()
        .close()
        .open("bean")
        .attr("id", "b")
        .attr("factory-bean", "a")
        .attr("factory-method", "make")
        .attr("destroy-method", "close")
        .close()
        .open("bean")
        .attr("id", "c")
        .attr("parent", "b")
        .close()
        .open("bean")
        .attr("id", "abstract")
        .close()
        .open("alias")
        .attr("name", "a")
        .attr("alias", "x")
        .close()
        .open("alias")
        .attr("name", "x")
        .attr("alias", "y")
        .close()
        .build()
}

/// An empty `<beans/>` document.
pub fn empty_beans() -> MemoryDocument {
    MemoryDocument::builder(BEANS_NS).open("beans").build()
}
